pub mod emoji_resolver;
