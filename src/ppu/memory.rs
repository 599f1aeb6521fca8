// PPU memory access methods

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::Mirroring;

impl Ppu {
    /// Mirror a nametable address ($2000-$2FFF) down to a physical VRAM offset.
    ///
    /// The PPU has 2KB of internal VRAM for nametables, but the address space
    /// allows for 4 nametables. This maps a nametable address to the
    /// appropriate physical memory location based on the mirroring mode.
    pub(super) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;

        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let mirrored_table = match self.mirroring {
            Mirroring::Horizontal => match table {
                0 | 1 => 0,
                2 | 3 => 1,
                _ => unreachable!(),
            },
            Mirroring::Vertical => match table {
                0 | 2 => 0,
                1 | 3 => 1,
                _ => unreachable!(),
            },
            Mirroring::SingleScreenA => 0,
            Mirroring::SingleScreenB => 1,
            Mirroring::FourScreen => {
                // Four-screen needs 4KB of dedicated VRAM on the cartridge,
                // which this mapper-0-only core does not model; fold onto the
                // two physical banks like horizontal mirroring instead.
                match table {
                    0 | 1 => 0,
                    2 | 3 => 1,
                    _ => unreachable!(),
                }
            }
        };

        mirrored_table * NAMETABLE_SIZE + offset
    }

    /// Mirror a palette address ($3F00-$3FFF) down to a physical palette RAM offset.
    ///
    /// $3F10, $3F14, $3F18, $3F1C mirror $3F00, $3F04, $3F08, $3F0C, since
    /// sprite palette entry 0 is actually the background color.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;

        if addr >= 16 && addr.is_multiple_of(4) {
            addr - 16
        } else {
            addr
        }
    }

    /// Read from PPU memory (VRAM): pattern tables, nametables, or palette RAM.
    pub(super) fn read_ppu_memory(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;

        match addr {
            // Pattern tables: $0000-$1FFF, backed by the PPU's own CHR copy.
            0x0000..=0x1FFF => self.chr[addr as usize],

            // Nametables: $2000-$2FFF
            0x2000..=0x2FFF => {
                let mirrored_addr = self.mirror_nametable_addr(addr);
                self.nametables[mirrored_addr]
            }

            // Nametable mirrors: $3000-$3EFF -> $2000-$2EFF
            0x3000..=0x3EFF => {
                let mirrored_addr = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[mirrored_addr]
            }

            // Palette RAM: $3F00-$3FFF
            0x3F00..=0x3FFF => {
                let mirrored_addr = self.mirror_palette_addr(addr);
                self.palette_ram[mirrored_addr]
            }

            _ => unreachable!(),
        }
    }

    /// Write to PPU memory (VRAM): pattern tables, nametables, or palette RAM.
    pub(super) fn write_ppu_memory(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;

        match addr {
            // Pattern tables: $0000-$1FFF. Only writable when the cartridge
            // declared CHR-RAM; CHR-ROM writes are silently dropped.
            0x0000..=0x1FFF => {
                if self.chr_is_ram {
                    self.chr[addr as usize] = data;
                }
            }

            // Nametables: $2000-$2FFF
            0x2000..=0x2FFF => {
                let mirrored_addr = self.mirror_nametable_addr(addr);
                self.nametables[mirrored_addr] = data;
            }

            // Nametable mirrors: $3000-$3EFF -> $2000-$2EFF
            0x3000..=0x3EFF => {
                let mirrored_addr = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[mirrored_addr] = data;
            }

            // Palette RAM: $3F00-$3FFF
            0x3F00..=0x3FFF => {
                let mirrored_addr = self.mirror_palette_addr(addr);
                self.palette_ram[mirrored_addr] = data;
            }

            _ => unreachable!(),
        }
    }
}
