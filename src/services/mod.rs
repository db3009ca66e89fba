/// Input classification ahead of date resolution.
pub mod classify;
/// Date resolution for the timestamp endpoint.
pub mod date_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Accepted free-form date grammars.
pub mod grammar;
/// Millisecond instants and their UTC rendering.
pub mod instant;
