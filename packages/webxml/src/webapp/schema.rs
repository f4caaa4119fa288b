//! Schema table for servlet deployment descriptors.
//!
//! One registry per model type, built bottom-up so composite handlers can
//! hold the registry of the type they create.

use std::sync::Arc;

use super::types::{
    ContextParam, ErrorPage, Filter, FilterMapping, InitParam, Listener, MimeMapping, Servlet,
    ServletMapping, SessionConfig, TagLib, WebAppConfiguration, WelcomeFileList,
};
use crate::config::WEB_APP_ROOT_TAG;
use crate::error::Result;
use crate::parser::DocumentParser;
use crate::registry::SchemaRegistry;

/// Parser bound to the deployment descriptor schema.
pub type WebAppSchema = DocumentParser<WebAppConfiguration>;

/// Drop servlets, filters and context params declared without any content.
fn present<S: Default + PartialEq>(value: S) -> Option<S> {
    (value != S::default()).then_some(value)
}

/// Create the schema for `<web-app>` documents.
///
/// # Errors
/// Returns `DuplicateHandler` if the table registers a tag twice.
///
/// # Examples
/// ```
/// use webxml::config::ParseOptions;
/// use webxml::webapp::create_web_app_schema;
///
/// let schema = create_web_app_schema().unwrap();
/// let app = schema
///     .parse_str("<web-app><display-name>Demo</display-name></web-app>", &ParseOptions::default())
///     .unwrap();
/// assert_eq!(app.display_name.as_deref(), Some("Demo"));
/// ```
pub fn create_web_app_schema() -> Result<WebAppSchema> {
    let init_param = Arc::new(init_param_registry()?);

    let mut registry = SchemaRegistry::new("WebAppConfiguration", WebAppConfiguration::default);

    registry.register_leaf("display-name", |app, text| {
        app.display_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("description", |app, text| {
        app.description = Some(text);
        Ok(())
    })?;
    registry.register_optional(
        "context-param",
        Arc::new(context_param_registry()?),
        present,
        WebAppConfiguration::add_context_param,
    )?;
    registry.register_composite(
        "listener",
        Arc::new(listener_registry()?),
        WebAppConfiguration::add_listener,
    )?;
    registry.register_optional(
        "servlet",
        Arc::new(servlet_registry(Arc::clone(&init_param))?),
        present,
        WebAppConfiguration::add_servlet,
    )?;
    registry.register_composite(
        "servlet-mapping",
        Arc::new(servlet_mapping_registry()?),
        WebAppConfiguration::add_servlet_mapping,
    )?;
    registry.register_optional(
        "filter",
        Arc::new(filter_registry(init_param)?),
        present,
        WebAppConfiguration::add_filter,
    )?;
    registry.register_composite(
        "filter-mapping",
        Arc::new(filter_mapping_registry()?),
        WebAppConfiguration::add_filter_mapping,
    )?;
    registry.register_composite(
        "welcome-file-list",
        Arc::new(welcome_file_list_registry()?),
        WebAppConfiguration::set_welcome_file_list,
    )?;
    registry.register_composite(
        "error-page",
        Arc::new(error_page_registry()?),
        WebAppConfiguration::add_error_page,
    )?;
    registry.register_composite(
        "mime-mapping",
        Arc::new(mime_mapping_registry()?),
        WebAppConfiguration::add_mime_mapping,
    )?;
    registry.register_composite(
        "taglib",
        Arc::new(taglib_registry()?),
        WebAppConfiguration::add_taglib,
    )?;
    registry.register_composite(
        "session-config",
        Arc::new(session_config_registry()?),
        WebAppConfiguration::set_session_config,
    )?;

    Ok(DocumentParser::new(WEB_APP_ROOT_TAG, Arc::new(registry)))
}

fn context_param_registry() -> Result<SchemaRegistry<ContextParam>> {
    let mut registry = SchemaRegistry::new("ContextParam", ContextParam::default);
    registry.register_leaf("param-name", |param, text| {
        param.param_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("param-value", |param, text| {
        param.param_value = Some(text);
        Ok(())
    })?;
    registry.register_leaf("description", |param, text| {
        param.description = Some(text);
        Ok(())
    })?;
    Ok(registry)
}

fn listener_registry() -> Result<SchemaRegistry<Listener>> {
    let mut registry = SchemaRegistry::new("Listener", Listener::default);
    registry.register_leaf("listener-class", |listener, text| {
        listener.listener_class = Some(text);
        Ok(())
    })?;
    Ok(registry)
}

fn init_param_registry() -> Result<SchemaRegistry<InitParam>> {
    let mut registry = SchemaRegistry::new("InitParam", InitParam::default);
    registry.register_leaf("param-name", |param, text| {
        param.param_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("param-value", |param, text| {
        param.param_value = Some(text);
        Ok(())
    })?;
    Ok(registry)
}

fn servlet_registry(init_param: Arc<SchemaRegistry<InitParam>>) -> Result<SchemaRegistry<Servlet>> {
    let mut registry = SchemaRegistry::new("Servlet", Servlet::default);
    registry.register_leaf("servlet-name", |servlet, text| {
        servlet.servlet_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("servlet-class", |servlet, text| {
        servlet.servlet_class = Some(text);
        Ok(())
    })?;
    registry.register_leaf("jsp-file", |servlet, text| {
        servlet.jsp_file = Some(text);
        Ok(())
    })?;
    registry.register_leaf("load-on-startup", Servlet::set_load_on_startup)?;
    registry.register_leaf("display-name", |servlet, text| {
        servlet.display_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("description", |servlet, text| {
        servlet.description = Some(text);
        Ok(())
    })?;
    registry.register_composite("init-param", init_param, Servlet::add_init_param)?;
    Ok(registry)
}

fn filter_registry(init_param: Arc<SchemaRegistry<InitParam>>) -> Result<SchemaRegistry<Filter>> {
    let mut registry = SchemaRegistry::new("Filter", Filter::default);
    registry.register_leaf("filter-name", |filter, text| {
        filter.filter_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("filter-class", |filter, text| {
        filter.filter_class = Some(text);
        Ok(())
    })?;
    registry.register_leaf("display-name", |filter, text| {
        filter.display_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("description", |filter, text| {
        filter.description = Some(text);
        Ok(())
    })?;
    registry.register_composite("init-param", init_param, Filter::add_init_param)?;
    Ok(registry)
}

fn servlet_mapping_registry() -> Result<SchemaRegistry<ServletMapping>> {
    let mut registry = SchemaRegistry::new("ServletMapping", ServletMapping::default);
    registry.register_leaf("servlet-name", |mapping, text| {
        mapping.servlet_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("url-pattern", |mapping, text| {
        mapping.url_pattern = Some(text);
        Ok(())
    })?;
    Ok(registry)
}

fn filter_mapping_registry() -> Result<SchemaRegistry<FilterMapping>> {
    let mut registry = SchemaRegistry::new("FilterMapping", FilterMapping::default);
    registry.register_leaf("filter-name", |mapping, text| {
        mapping.filter_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("url-pattern", |mapping, text| {
        mapping.url_pattern = Some(text);
        Ok(())
    })?;
    registry.register_leaf("servlet-name", |mapping, text| {
        mapping.servlet_name = Some(text);
        Ok(())
    })?;
    registry.register_leaf("dispatcher", |mapping, text| {
        mapping.dispatcher = Some(text);
        Ok(())
    })?;
    Ok(registry)
}

fn welcome_file_list_registry() -> Result<SchemaRegistry<WelcomeFileList>> {
    let mut registry = SchemaRegistry::new("WelcomeFileList", WelcomeFileList::default);
    registry.register_leaf("welcome-file", |list, text| {
        list.welcome_files.push(text);
        Ok(())
    })?;
    Ok(registry)
}

fn error_page_registry() -> Result<SchemaRegistry<ErrorPage>> {
    let mut registry = SchemaRegistry::new("ErrorPage", ErrorPage::default);
    registry.register_leaf("error-code", ErrorPage::set_error_code)?;
    registry.register_leaf("exception-type", |page, text| {
        page.exception_type = Some(text);
        Ok(())
    })?;
    registry.register_leaf("location", |page, text| {
        page.location = Some(text);
        Ok(())
    })?;
    Ok(registry)
}

fn mime_mapping_registry() -> Result<SchemaRegistry<MimeMapping>> {
    let mut registry = SchemaRegistry::new("MimeMapping", MimeMapping::default);
    registry.register_leaf("extension", |mapping, text| {
        mapping.extension = Some(text);
        Ok(())
    })?;
    registry.register_leaf("mime-type", |mapping, text| {
        mapping.mime_type = Some(text);
        Ok(())
    })?;
    Ok(registry)
}

fn taglib_registry() -> Result<SchemaRegistry<TagLib>> {
    let mut registry = SchemaRegistry::new("TagLib", TagLib::default);
    registry.register_leaf("taglib-uri", |taglib, text| {
        taglib.taglib_uri = Some(text);
        Ok(())
    })?;
    registry.register_leaf("taglib-location", |taglib, text| {
        taglib.taglib_location = Some(text);
        Ok(())
    })?;
    Ok(registry)
}

fn session_config_registry() -> Result<SchemaRegistry<SessionConfig>> {
    let mut registry = SchemaRegistry::new("SessionConfig", SessionConfig::default);
    registry.register_leaf("session-timeout", SessionConfig::set_session_timeout)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_root_registry_tags() {
        let schema = create_web_app_schema().unwrap();
        assert_eq!(schema.root_tag(), "web-app");
        assert_eq!(schema.registry().type_name(), "WebAppConfiguration");

        let expected: HashSet<&str> = [
            "display-name",
            "description",
            "context-param",
            "listener",
            "servlet",
            "servlet-mapping",
            "filter",
            "filter-mapping",
            "welcome-file-list",
            "error-page",
            "mime-mapping",
            "taglib",
            "session-config",
        ]
        .into_iter()
        .collect();
        assert_eq!(schema.registry().registered_tags(), expected);
    }

    #[test]
    fn test_leaf_and_composite_kinds() {
        let schema = create_web_app_schema().unwrap();
        let registry = schema.registry();

        assert!(registry.lookup("display-name").unwrap().is_leaf());
        assert!(!registry.lookup("servlet").unwrap().is_leaf());
        assert!(registry.lookup("security-constraint").is_none());
    }

    #[test]
    fn test_present_drops_default() {
        assert_eq!(present(Servlet::default()), None);

        let servlet = Servlet {
            servlet_name: Some(String::new()),
            ..Servlet::default()
        };
        assert_eq!(present(servlet.clone()), Some(servlet));
    }

    #[test]
    fn test_servlet_registry_tags() {
        let registry = servlet_registry(Arc::new(init_param_registry().unwrap())).unwrap();
        assert_eq!(registry.len(), 7);
        assert!(registry.has_handler("init-param"));
        assert!(registry.has_handler("jsp-file"));
    }

    #[test]
    fn test_schema_is_shareable_across_threads() {
        let schema = Arc::new(create_web_app_schema().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let schema = Arc::clone(&schema);
                std::thread::spawn(move || {
                    let xml = format!("<web-app><display-name>app{i}</display-name></web-app>");
                    schema
                        .parse_str(&xml, &crate::config::ParseOptions::default())
                        .unwrap()
                        .display_name
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(format!("app{i}")));
        }
    }
}
