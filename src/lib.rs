pub mod table;
pub mod encode;
pub mod decode;
pub mod io_stream;

pub use table::{block_index, block_start, BLOCK_STARTS, PADDING_BLOCK_START};
pub use encode::{encode, encode_wrapped, Encoder};
pub use decode::{decode, decode_lenient, DecodeError, Decoder};
pub use io_stream::{DecodeReader, EncodeWriter};
