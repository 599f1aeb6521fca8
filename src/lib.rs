// NES emulator core library.
//
// A cycle-stepped 6502 CPU, a 2C02-style PPU, an iNES mapper-0 cartridge
// loader, and a bus wiring them together under a Console orchestrator.
// Audio, input polling, save states, and windowed presentation are left to
// a collaborating presentation layer.

pub mod bus;
pub mod cartridge;
pub mod config;
pub mod console;
pub mod cpu;
pub mod error;
pub mod ppu;
pub mod ram;

pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, Mirroring};
pub use config::CoreConfig;
pub use console::Console;
pub use cpu::Cpu;
pub use error::{CoreError, CoreResult};
pub use ppu::Ppu;
pub use ram::Ram;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = Bus::new();
        let _ram = Ram::new();
        let _console = Console::new();
        let _config = CoreConfig::default();
    }
}
