// Error taxonomy for the emulation core.
//
// Cartridge-loading failures abort startup; BusRomWrite and IllegalOpcode
// are recoverable and only logged (see bus.rs / cpu/execute.rs).

use std::path::PathBuf;

/// Errors surfaced by the core, per the taxonomy in the error-handling design.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to read cartridge file {path}: {source}")]
    CartridgeIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cartridge at {path:?} is missing the iNES magic bytes")]
    CartridgeBadMagic { path: PathBuf },

    #[error("cartridge mirroring bits decode to a reserved value")]
    CartridgeBadMirroring,

    #[error("cartridge requests unsupported mapper {mapper} (only mapper 0 / NROM is supported)")]
    CartridgeUnsupportedMapper { mapper: u8 },

    #[error("write of {value:#04x} to PRG-ROM address {address:#06x} on a mapper-0 cartridge")]
    BusRomWrite { address: u16, value: u8 },

    #[error("illegal opcode {opcode:#04x} at {pc:#06x}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    #[error("read of unmapped bus address {address:#06x}")]
    OpenBusRead { address: u16 },
}

pub type CoreResult<T> = Result<T, CoreError>;
