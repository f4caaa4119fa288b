//! Web application configuration model.
//!
//! These types mirror the elements of a servlet deployment descriptor.
//! Text values are stored exactly as they appear in the document; only
//! numeric fields are trimmed before parsing.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FieldError;

/// Result type for model mutation functions.
pub type FieldResult = std::result::Result<(), FieldError>;

/// Parse a numeric leaf value, ignoring surrounding whitespace.
fn parse_number<N>(text: &str) -> std::result::Result<N, FieldError>
where
    N: FromStr<Err = std::num::ParseIntError>,
{
    text.trim()
        .parse()
        .map_err(|source| FieldError::InvalidInteger {
            value: text.to_string(),
            source,
        })
}

/// Root of a deployment descriptor (`<web-app>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebAppConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context_params: Vec<ContextParam>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listeners: Vec<Listener>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servlets: Vec<Servlet>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servlet_mappings: Vec<ServletMapping>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_mappings: Vec<FilterMapping>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_file_list: Option<WelcomeFileList>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error_pages: Vec<ErrorPage>,

    /// Mime mappings keyed by file extension.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mime_mappings: BTreeMap<String, MimeMapping>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub taglibs: Vec<TagLib>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_config: Option<SessionConfig>,
}

impl WebAppConfiguration {
    pub fn add_context_param(&mut self, param: ContextParam) -> FieldResult {
        self.context_params.push(param);
        Ok(())
    }

    pub fn add_listener(&mut self, listener: Listener) -> FieldResult {
        self.listeners.push(listener);
        Ok(())
    }

    pub fn add_servlet(&mut self, servlet: Servlet) -> FieldResult {
        self.servlets.push(servlet);
        Ok(())
    }

    pub fn add_servlet_mapping(&mut self, mapping: ServletMapping) -> FieldResult {
        self.servlet_mappings.push(mapping);
        Ok(())
    }

    pub fn add_filter(&mut self, filter: Filter) -> FieldResult {
        self.filters.push(filter);
        Ok(())
    }

    pub fn add_filter_mapping(&mut self, mapping: FilterMapping) -> FieldResult {
        self.filter_mappings.push(mapping);
        Ok(())
    }

    /// Replace the welcome file list; a later element wins.
    pub fn set_welcome_file_list(&mut self, list: WelcomeFileList) -> FieldResult {
        self.welcome_file_list = Some(list);
        Ok(())
    }

    pub fn add_error_page(&mut self, page: ErrorPage) -> FieldResult {
        self.error_pages.push(page);
        Ok(())
    }

    /// Insert a mime mapping keyed by its extension.
    ///
    /// # Errors
    /// `MissingKey` when the mapping has no extension, `DuplicateKey` when
    /// the extension is already mapped.
    pub fn add_mime_mapping(&mut self, mapping: MimeMapping) -> FieldResult {
        let extension = mapping
            .extension
            .clone()
            .ok_or(FieldError::MissingKey("extension"))?;
        if self.mime_mappings.contains_key(&extension) {
            return Err(FieldError::DuplicateKey(extension));
        }
        self.mime_mappings.insert(extension, mapping);
        Ok(())
    }

    pub fn add_taglib(&mut self, taglib: TagLib) -> FieldResult {
        self.taglibs.push(taglib);
        Ok(())
    }

    /// Replace the session configuration; a later element wins.
    pub fn set_session_config(&mut self, config: SessionConfig) -> FieldResult {
        self.session_config = Some(config);
        Ok(())
    }

    /// Find a servlet by its declared name.
    #[must_use]
    pub fn servlet(&self, name: &str) -> Option<&Servlet> {
        self.servlets
            .iter()
            .find(|s| s.servlet_name.as_deref() == Some(name))
    }

    /// Find a filter by its declared name.
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&Filter> {
        self.filters
            .iter()
            .find(|f| f.filter_name.as_deref() == Some(name))
    }

    /// Find a context parameter by name.
    #[must_use]
    pub fn context_param(&self, name: &str) -> Option<&ContextParam> {
        self.context_params
            .iter()
            .find(|p| p.param_name.as_deref() == Some(name))
    }

    /// Look up the mime type mapped to a file extension.
    #[must_use]
    pub fn mime_type(&self, extension: &str) -> Option<&str> {
        self.mime_mappings
            .get(extension)
            .and_then(|m| m.mime_type.as_deref())
    }

    /// Welcome files in declaration order, empty when none are declared.
    #[must_use]
    pub fn welcome_files(&self) -> &[String] {
        self.welcome_file_list
            .as_ref()
            .map(|list| list.welcome_files.as_slice())
            .unwrap_or_default()
    }
}

/// Application-wide initialization parameter (`<context-param>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Application event listener (`<listener>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listener {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_class: Option<String>,
}

/// Servlet or JSP declaration (`<servlet>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Servlet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servlet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servlet_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsp_file: Option<String>,
    /// Startup order; negative or absent means load lazily.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_on_startup: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub init_params: Vec<InitParam>,
}

impl Servlet {
    /// Set the startup order. Blank text means no order.
    pub fn set_load_on_startup(&mut self, text: String) -> FieldResult {
        self.load_on_startup = if text.trim().is_empty() {
            None
        } else {
            Some(parse_number(&text)?)
        };
        Ok(())
    }

    pub fn add_init_param(&mut self, param: InitParam) -> FieldResult {
        self.init_params.push(param);
        Ok(())
    }

    /// Find an init parameter by name.
    #[must_use]
    pub fn init_param(&self, name: &str) -> Option<&str> {
        find_init_param(&self.init_params, name)
    }
}

/// Filter declaration (`<filter>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub init_params: Vec<InitParam>,
}

impl Filter {
    pub fn add_init_param(&mut self, param: InitParam) -> FieldResult {
        self.init_params.push(param);
        Ok(())
    }

    /// Find an init parameter by name.
    #[must_use]
    pub fn init_param(&self, name: &str) -> Option<&str> {
        find_init_param(&self.init_params, name)
    }
}

fn find_init_param<'a>(params: &'a [InitParam], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|p| p.param_name.as_deref() == Some(name))
        .and_then(|p| p.param_value.as_deref())
}

/// Servlet or filter initialization parameter (`<init-param>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_value: Option<String>,
}

/// URL pattern bound to a servlet (`<servlet-mapping>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServletMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servlet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_pattern: Option<String>,
}

/// URL pattern or servlet bound to a filter (`<filter-mapping>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servlet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatcher: Option<String>,
}

/// Ordered welcome files (`<welcome-file-list>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WelcomeFileList {
    pub welcome_files: Vec<String>,
}

/// Error page declaration (`<error-page>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ErrorPage {
    pub fn set_error_code(&mut self, text: String) -> FieldResult {
        self.error_code = Some(parse_number(&text)?);
        Ok(())
    }
}

/// Extension to mime type mapping (`<mime-mapping>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MimeMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Tag library location (`<taglib>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagLib {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taglib_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taglib_location: Option<String>,
}

/// Session settings (`<session-config>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    /// Timeout in minutes; zero or negative means sessions never expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<i32>,
}

impl SessionConfig {
    pub fn set_session_timeout(&mut self, text: String) -> FieldResult {
        self.session_timeout = Some(parse_number(&text)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_trims() {
        assert_eq!(parse_number::<i32>("\n  5 \n").unwrap(), 5);
        assert_eq!(parse_number::<i32>("-1").unwrap(), -1);
    }

    #[test]
    fn test_parse_number_keeps_original_text_in_error() {
        let err = parse_number::<u16>(" 4o4 ").unwrap_err();
        assert!(matches!(err, FieldError::InvalidInteger { ref value, .. } if value == " 4o4 "));
    }

    #[test]
    fn test_blank_load_on_startup_means_no_order() {
        let mut servlet = Servlet::default();
        servlet.set_load_on_startup(" 2 ".to_string()).unwrap();
        assert_eq!(servlet.load_on_startup, Some(2));

        servlet.set_load_on_startup("\n  ".to_string()).unwrap();
        assert_eq!(servlet.load_on_startup, None);
    }

    #[test]
    fn test_add_mime_mapping_keyed_by_extension() {
        let mut app = WebAppConfiguration::default();
        app.add_mime_mapping(MimeMapping {
            extension: Some("svg".to_string()),
            mime_type: Some("image/svg+xml".to_string()),
        })
        .unwrap();

        assert_eq!(app.mime_type("svg"), Some("image/svg+xml"));
        assert_eq!(app.mime_type("png"), None);
    }

    #[test]
    fn test_add_mime_mapping_rejects_duplicate() {
        let mut app = WebAppConfiguration::default();
        let mapping = MimeMapping {
            extension: Some("txt".to_string()),
            mime_type: Some("text/plain".to_string()),
        };
        app.add_mime_mapping(mapping.clone()).unwrap();

        let err = app.add_mime_mapping(mapping).unwrap_err();
        assert!(matches!(err, FieldError::DuplicateKey(ref ext) if ext == "txt"));
    }

    #[test]
    fn test_add_mime_mapping_requires_extension() {
        let mut app = WebAppConfiguration::default();
        let err = app.add_mime_mapping(MimeMapping::default()).unwrap_err();
        assert!(matches!(err, FieldError::MissingKey("extension")));
    }

    #[test]
    fn test_lookups_by_name() {
        let mut app = WebAppConfiguration::default();
        app.add_servlet(Servlet {
            servlet_name: Some("main".to_string()),
            init_params: vec![InitParam {
                param_name: Some("debug".to_string()),
                param_value: Some("true".to_string()),
            }],
            ..Servlet::default()
        })
        .unwrap();
        app.add_context_param(ContextParam {
            param_name: Some("env".to_string()),
            param_value: Some("prod".to_string()),
            description: None,
        })
        .unwrap();

        let servlet = app.servlet("main").unwrap();
        assert_eq!(servlet.init_param("debug"), Some("true"));
        assert_eq!(servlet.init_param("missing"), None);
        assert!(app.servlet("other").is_none());
        assert!(app.filter("main").is_none());
        assert_eq!(
            app.context_param("env").and_then(|p| p.param_value.as_deref()),
            Some("prod")
        );
    }

    #[test]
    fn test_welcome_files_default_empty() {
        let mut app = WebAppConfiguration::default();
        assert!(app.welcome_files().is_empty());

        app.set_welcome_file_list(WelcomeFileList {
            welcome_files: vec!["index.html".to_string()],
        })
        .unwrap();
        assert_eq!(app.welcome_files(), ["index.html"]);
    }

    #[test]
    fn test_session_timeout_parsing() {
        let mut config = SessionConfig::default();
        config.set_session_timeout(" 30 ".to_string()).unwrap();
        assert_eq!(config.session_timeout, Some(30));
        assert!(config.set_session_timeout("soon".to_string()).is_err());
    }
}
