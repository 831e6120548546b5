#![doc = include_str!("../README.md")]

pub use xs_codec as codec;
pub use xs_typename as typename;
pub use xs_utils as utils;

pub use xs_codec::{CodecConfig, EnvelopeCodec, EnvelopeError, TypeIdentity};
