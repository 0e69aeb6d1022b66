mod str_parser;

pub use str_parser::StrOutputParser;
