//! Report decoder - one raw report in, the set of held scancodes out.

use heapless::Vec;

use crate::config;

/// Scancode slots in one report (bytes 2..8).
pub const MAX_HELD_KEYS: usize = config::REPORT_SIZE - 2;

/// The scancodes held down during one polling tick.
///
/// Pure set semantics: slot order inside the report carries no meaning,
/// only membership does. Produced fresh per report and consumed
/// immediately.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScancodeSet {
    codes: Vec<u8, MAX_HELD_KEYS>,
}

impl ScancodeSet {
    pub const fn empty() -> Self {
        Self { codes: Vec::new() }
    }

    pub fn contains(&self, code: u8) -> bool {
        self.codes.contains(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.codes.iter().copied()
    }
}

/// Set-wise equality; slot order is irrelevant.
impl PartialEq for ScancodeSet {
    fn eq(&self, other: &Self) -> bool {
        self.codes.iter().all(|c| other.contains(*c))
            && other.codes.iter().all(|c| self.contains(*c))
    }
}

impl Eq for ScancodeSet {}

/// Decode one raw keypad report.
///
/// Rejects anything that is not exactly [`config::REPORT_SIZE`] bytes.
/// Bytes 0 and 1 (modifier bitfield, reserved) are dropped
/// unconditionally - modifier keys are invisible to this system, a
/// documented limitation kept for compatibility with the wire format.
/// Every non-zero byte from offset 2 on is a held scancode; zero means
/// an empty slot. Codes the lookup table does not know still decode -
/// higher layers decide what to do with them.
pub fn decode(report: &[u8]) -> Option<ScancodeSet> {
    if report.len() != config::REPORT_SIZE {
        return None;
    }
    let mut set = ScancodeSet::empty();
    for &code in &report[2..] {
        // Error-rollover reports repeat 0x01 in every slot; keep one.
        if code != 0 && !set.contains(code) {
            // Capacity equals the slot count, so this cannot overflow.
            let _ = set.codes.push(code);
        }
    }
    Some(set)
}
