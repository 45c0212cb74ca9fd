//! Library spec XML reader.
//!
//! Reads the keyword documentation files generated for libraries and
//! resources. Both the legacy layout (`<arg>name</arg>`) and the newer one
//! (`<arg repr="name=default">` with nested elements) are understood.

use std::path::PathBuf;
use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smol_str::SmolStr;

use crate::error::{NamespaceError, Result};
use crate::hir::{LibraryKeyword, XmlResource};

/// A parsed `<keywordspec>` document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibSpec {
    pub name: SmolStr,
    /// `LIBRARY` or `RESOURCE`.
    pub spec_type: SmolStr,
    pub keywords: Vec<LibraryKeyword>,
}

impl LibSpec {
    pub fn is_resource(&self) -> bool {
        self.spec_type.eq_ignore_ascii_case("resource")
    }

    /// Treat the spec as a resource imported from `source`.
    pub fn into_xml_resource(self, source: impl Into<PathBuf>) -> XmlResource {
        XmlResource {
            name: self.name,
            source: source.into(),
            keywords: self.keywords,
        }
    }
}

fn spec_error(err: impl std::fmt::Display) -> NamespaceError {
    NamespaceError::LibSpec(err.to_string())
}

fn attribute(element: &BytesStart<'_>, key: &[u8]) -> Result<Option<SmolStr>> {
    for attr in element.attributes() {
        let attr = attr.map_err(spec_error)?;
        if attr.key.as_ref() == key {
            let value = attr.unescape_value().map_err(spec_error)?;
            return Ok(Some(SmolStr::new(value)));
        }
    }
    Ok(None)
}

fn keyword_start(element: &BytesStart<'_>) -> Result<LibraryKeyword> {
    let name = attribute(element, b"name")?
        .ok_or_else(|| NamespaceError::LibSpec("keyword without a name".into()))?;
    Ok(LibraryKeyword::new(name))
}

/// Parse a spec document.
pub fn parse(xml: &str) -> Result<LibSpec> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut spec = LibSpec::default();
    let mut seen_root = false;
    let mut current: Option<LibraryKeyword> = None;
    let mut in_arg = false;
    let mut in_doc = false;

    loop {
        match reader.read_event().map_err(spec_error)? {
            Event::Start(element) => match element.name().as_ref() {
                b"keywordspec" => {
                    seen_root = true;
                    spec.name = attribute(&element, b"name")?.unwrap_or_default();
                    spec.spec_type = attribute(&element, b"type")?.unwrap_or_default();
                }
                b"kw" => current = Some(keyword_start(&element)?),
                b"arg" => match (&mut current, attribute(&element, b"repr")?) {
                    (Some(kw), Some(repr)) => kw.args.push(repr),
                    _ => in_arg = true,
                },
                b"doc" => in_doc = true,
                _ => {}
            },
            Event::Empty(element) => match element.name().as_ref() {
                b"kw" => spec.keywords.push(keyword_start(&element)?),
                b"arg" => {
                    if let (Some(kw), Some(repr)) = (&mut current, attribute(&element, b"repr")?) {
                        kw.args.push(repr);
                    }
                }
                _ => {}
            },
            Event::Text(text) => {
                if let Some(kw) = &mut current {
                    let text = text.unescape().map_err(spec_error)?;
                    if in_arg {
                        kw.args.push(SmolStr::new(text));
                    } else if in_doc {
                        kw.doc = Arc::from(&*text);
                    }
                }
            }
            Event::End(element) => match element.name().as_ref() {
                b"kw" => spec.keywords.extend(current.take()),
                b"arg" => in_arg = false,
                b"doc" => in_doc = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(NamespaceError::LibSpec("missing <keywordspec> root".into()));
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<keywordspec name="common" type="RESOURCE" generated="20240101 10:00:00">
  <doc>Shared keywords.</doc>
  <kw name="Login">
    <arguments>
      <arg>user</arg>
      <arg>password=secret</arg>
    </arguments>
    <doc>Logs in &amp; waits.</doc>
  </kw>
  <kw name="Logout"/>
</keywordspec>
"#;

    const MODERN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<keywordspec name="BuiltIn" type="LIBRARY" format="ROBOT" specversion="4">
  <keywords>
    <kw name="Log">
      <arguments repr="message, level=INFO">
        <arg kind="POSITIONAL_OR_NAMED" required="true" repr="message">
          <name>message</name>
        </arg>
        <arg kind="POSITIONAL_OR_NAMED" required="false" repr="level=INFO">
          <name>level</name>
          <default>INFO</default>
        </arg>
      </arguments>
      <doc>Logs the given message.</doc>
    </kw>
  </keywords>
</keywordspec>
"#;

    #[test]
    fn test_parse_legacy_resource_spec() {
        let spec = parse(LEGACY).unwrap();
        assert_eq!(spec.name, "common");
        assert!(spec.is_resource());
        assert_eq!(spec.keywords.len(), 2);

        let login = &spec.keywords[0];
        assert_eq!(login.name, "Login");
        assert_eq!(login.args, ["user", "password=secret"]);
        assert_eq!(&*login.doc, "Logs in & waits.");
        assert_eq!(spec.keywords[1].name, "Logout");
    }

    #[test]
    fn test_parse_modern_library_spec() {
        let spec = parse(MODERN).unwrap();
        assert_eq!(spec.name, "BuiltIn");
        assert!(!spec.is_resource());

        let log = &spec.keywords[0];
        assert_eq!(log.args, ["message", "level=INFO"]);
        assert_eq!(&*log.doc, "Logs the given message.");
    }

    #[test]
    fn test_into_xml_resource() {
        let resource = parse(LEGACY).unwrap().into_xml_resource("/data/common.xml");
        assert_eq!(resource.name, "common");
        assert_eq!(resource.keywords.len(), 2);
    }

    #[test]
    fn test_rejects_non_spec_documents() {
        assert!(matches!(parse("<html/>"), Err(NamespaceError::LibSpec(_))));
    }

    #[test]
    fn test_keyword_without_name() {
        assert!(parse(r#"<keywordspec name="X"><kw/></keywordspec>"#).is_err());
    }
}
