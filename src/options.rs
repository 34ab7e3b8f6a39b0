/// Codec used for input that carries no byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultCodec {
    #[default]
    Utf8,
    Latin1,
}

impl DefaultCodec {
    pub fn as_str(self) -> &'static str {
        match self {
            DefaultCodec::Utf8 => "utf-8",
            DefaultCodec::Latin1 => "latin-1",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub default_codec: DefaultCodec,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_codec(mut self, default_codec: DefaultCodec) -> Self {
        self.default_codec = default_codec;
        self
    }
}
