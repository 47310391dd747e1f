pub mod paths;

mod class_name;
mod error;
mod http;
mod object;
mod registry;
mod resolver;
mod routing;
mod search_path;

pub use class_name::ClassName;
pub use error::Error;
pub use http::{HttpData, RequestData};
pub use object::{InstanceId, Object};
pub use registry::ClassRegistry;
pub use resolver::{NameResolver, Resolution};
pub use routing::{RouteDefaults, RouteRule, RoutedUri, Router, RoutesConfig, Uri};
pub use search_path::SearchPaths;
