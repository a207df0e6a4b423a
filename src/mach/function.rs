use super::Memory;
use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

pub const USR_READ: i16 = 276;
pub const USR_WRITE: i16 = 280;

pub struct Function {}

impl Function {
    /// A uniform value in `0..n`.
    pub fn rnd<R: Rng>(rng: &mut R, n: i16) -> Result<i16> {
        if n == 0 {
            return Err(error!(RndArgument));
        }
        if n < 0 {
            return Err(error!(RndArgument;
                format!("RND argument must be positive, given '{}'.", n)));
        }
        Ok(rng.gen_range(0..n))
    }

    /// Emulated machine-language call. `args` holds the routine, the
    /// XReg address and the AReg value, in that order.
    pub fn usr(memory: &mut Memory, args: &[i16]) -> Result<i16> {
        let routine = args.get(0).copied().unwrap_or_default();
        if routine != USR_READ && routine != USR_WRITE {
            return Err(error!(UsrRoutine;
                format!("USR only supports read (276) or write (280) subroutines, given '{}'.", routine)));
        }
        let address = match args.get(1) {
            Some(address) => *address,
            None => return Err(error!(UsrAddress)),
        };
        if routine == USR_READ {
            return Ok(memory.peek(address) as i16);
        }
        match args.get(2) {
            None => Err(error!(UsrValue)),
            Some(value) if *value < 0 || *value >= 256 => Err(error!(UsrValue;
                format!("USR write routine only supports values in AReg between 0 and 255, given '{}'.", value))),
            Some(value) => Ok(memory.poke(address, *value as u8) as i16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_rnd() {
        let mut rng = StdRng::seed_from_u64(1976);
        for _ in 0..100 {
            let n = Function::rnd(&mut rng, 6).unwrap();
            assert!(n >= 0 && n < 6);
        }
        assert_eq!(Function::rnd(&mut rng, 0).unwrap_err().number(), 259);
        assert_eq!(Function::rnd(&mut rng, -3).unwrap_err().number(), 259);
    }

    #[test]
    fn test_usr() {
        let mut mem = Memory::default();
        assert_eq!(Function::usr(&mut mem, &[280, 300, 99]).unwrap(), 99);
        assert_eq!(Function::usr(&mut mem, &[276, 300]).unwrap(), 99);
        assert_eq!(Function::usr(&mut mem, &[1, 300]).unwrap_err().number(), 360);
        assert_eq!(Function::usr(&mut mem, &[276]).unwrap_err().number(), 361);
        assert_eq!(Function::usr(&mut mem, &[280, 300]).unwrap_err().number(), 362);
        assert_eq!(Function::usr(&mut mem, &[280, 300, 256]).unwrap_err().number(), 362);
    }
}
