pub mod ast;
pub mod builder;
pub mod decode;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod serializer;

pub use ast::{Document, Node, Number, Value};
pub use builder::{DocumentBuilder, NodeBuilder};
pub use error::KdlError;
pub use serializer::serialize;
