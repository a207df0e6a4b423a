pub const MEMORY_SIZE: usize = 65536;

/// ## USR memory
///
/// A flat 64K byte array reachable only through the USR read and
/// write routines. Negative addresses count back from the top, so
/// every 16-bit address is valid.

#[derive(Clone)]
pub struct Memory {
    ram: Vec<u8>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory({} bytes)", self.ram.len())
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory {
            ram: vec![0; MEMORY_SIZE],
        }
    }
}

impl Memory {
    pub fn clear(&mut self) {
        for byte in self.ram.iter_mut() {
            *byte = 0;
        }
    }

    fn index(address: i16) -> usize {
        address as u16 as usize
    }

    pub fn peek(&self, address: i16) -> u8 {
        self.ram[Memory::index(address)]
    }

    pub fn poke(&mut self, address: i16, value: u8) -> u8 {
        self.ram[Memory::index(address)] = value;
        value
    }
}
