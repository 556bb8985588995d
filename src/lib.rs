pub mod models {
    pub mod conversion;
    pub mod facade;
}

pub mod service {
    pub mod codec;
    pub mod config_service;
    pub mod error;
    pub mod line_converter;
    pub mod line_reader;
    pub mod validation;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod utils;
}

pub use models::conversion::{ConversionOutcome, ConversionRequest, ConverterOptions, Operation};
pub use service::codec::{decode_token, encode_char};
pub use service::error::{CodecError, ConversionError};
pub use service::line_converter::LineConverter;
