/// Markup tree model
pub mod node;

/// XML escaping rules
pub mod escape;

/// Sink abstraction
pub mod writer;

/// Recursive tree-to-markup serializer
pub mod serializer;

/// Feed kinds and tagged items
pub mod feed;

/// Generation orchestration
pub mod generator;
