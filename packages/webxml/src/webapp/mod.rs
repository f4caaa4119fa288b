//! Servlet deployment descriptor (`web.xml`) model and schema.

mod schema;
mod types;

pub use schema::{create_web_app_schema, WebAppSchema};
pub use types::{
    ContextParam, ErrorPage, FieldResult, Filter, FilterMapping, InitParam, Listener, MimeMapping,
    Servlet, ServletMapping, SessionConfig, TagLib, WebAppConfiguration, WelcomeFileList,
};
