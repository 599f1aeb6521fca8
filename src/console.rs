// Console - top-level orchestrator
//
// Owns the CPU and the bus (which in turn owns RAM, the PPU, and the
// optional cartridge) and drives the 1:3 CPU:PPU master clock.

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::error::CoreResult;
use std::path::Path;

/// Result of stepping one CPU instruction.
pub struct StepOutcome {
    /// CPU cycles spent, including any interrupt service or OAM-DMA stall.
    pub cycles: u32,
    /// Whether a PPU frame completed during this span.
    pub frame_complete: bool,
}

/// Top-level NES system: a CPU and a bus, stepped together.
pub struct Console {
    cpu: Cpu,
    bus: Bus,
    trace_enabled: bool,
}

impl Console {
    /// Build every component in its power-on state with no cartridge inserted.
    pub fn new() -> Self {
        Console {
            cpu: Cpu::new(),
            bus: Bus::new(),
            trace_enabled: false,
        }
    }

    /// Parse an iNES file, install it on the bus, and reset the CPU.
    ///
    /// On a loader error the console is left exactly as it was: no partial
    /// cartridge swap happens.
    pub fn load_cartridge<P: AsRef<Path>>(&mut self, path: P) -> CoreResult<()> {
        let cartridge = Cartridge::from_ines_file(path)?;
        self.bus.load_cartridge(cartridge);
        self.cpu.reset(&mut self.bus);
        Ok(())
    }

    /// Re-run CPU reset without touching the inserted cartridge.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
    }

    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
    }

    /// The canonical disassembly line for the instruction about to execute,
    /// when tracing is enabled.
    pub fn trace_line(&mut self) -> Option<String> {
        if self.trace_enabled {
            Some(self.cpu.trace(&mut self.bus))
        } else {
            None
        }
    }

    /// Execute exactly one CPU instruction, servicing a pending NMI or IRQ
    /// first (NMI takes priority when both are latched) and folding in any
    /// OAM-DMA stall, then step the PPU three times per CPU cycle consumed.
    pub fn step_instruction(&mut self) -> StepOutcome {
        if self.bus.ppu.nmi_pending() {
            self.bus.ppu.clear_nmi();
            self.cpu.nmi(&mut self.bus);
        } else {
            self.cpu.poll_irq(&mut self.bus);
        }

        let mut cycles = self.cpu.step(&mut self.bus) as u32;

        if let Some(page) = self.bus.take_oam_dma_request() {
            self.bus.perform_oam_dma(page);
            // The transfer takes 513 cycles on an even CPU cycle, 514 on odd.
            cycles += if cycles % 2 == 0 { 513 } else { 514 };
        }

        let mut frame_complete = false;
        for _ in 0..cycles * 3 {
            if self.bus.ppu.step() {
                frame_complete = true;
            }
        }

        StepOutcome {
            cycles,
            frame_complete,
        }
    }

    /// Run `step_instruction()` until a frame completes, then return the
    /// completed framebuffer.
    pub fn run_frame(&mut self) -> &[u8] {
        loop {
            if self.step_instruction().frame_complete {
                break;
            }
        }
        self.bus.ppu.frame()
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn framebuffer(&self) -> &[u8] {
        self.bus.ppu.frame()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
