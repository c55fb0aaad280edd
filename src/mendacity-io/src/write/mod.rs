mod generic_writer;
pub use generic_writer::{GenericWriter, WriterError};

mod ped;
pub use ped::PedEmitter;

mod vcf;
pub use vcf::{VcfEmitter, POSITION_STRIDE, START_POSITION};

mod tex;
pub use tex::DiagramEmitter;
