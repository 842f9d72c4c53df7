use super::keypad::{decode, ScancodeSet, MAX_HELD_KEYS};
use super::scancodes::{self, key_name};

// Decoder

#[test]
fn decode_empty_report() {
    let set = decode(&[0; 8]).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn decode_single_key() {
    let set = decode(&[0, 0, 0x59, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.contains(scancodes::KP_1));
}

#[test]
fn decode_skips_zero_slots_anywhere() {
    let set = decode(&[0, 0, 0, 0x5a, 0, 0x63, 0, 0x58]).unwrap();
    assert_eq!(set.len(), 3);
    assert!(set.contains(scancodes::KP_2));
    assert!(set.contains(scancodes::KP_DOT));
    assert!(set.contains(scancodes::KP_ENTER));
}

#[test]
fn decode_ignores_modifier_and_reserved_bytes() {
    // Bytes 0 and 1 are dropped no matter their value.
    let set = decode(&[0xff, 0xff, 0, 0, 0, 0, 0, 0]).unwrap();
    assert!(set.is_empty());

    let set = decode(&[0x02, 0x01, 0x59, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.contains(0x59));
    assert!(!set.contains(0x02));
    assert!(!set.contains(0x01));
}

#[test]
fn decode_full_rollover() {
    let set = decode(&[0, 0, 0x59, 0x5a, 0x5b, 0x5c, 0x5d, 0x5e]).unwrap();
    assert_eq!(set.len(), MAX_HELD_KEYS);
    for code in 0x59..=0x5e {
        assert!(set.contains(code));
    }
}

#[test]
fn decode_error_rollover_dedupes() {
    // A phantom-key report repeats 0x01 in every slot.
    let set = decode(&[0, 0, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01]).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.contains(scancodes::ERR_ROLLOVER));
}

#[test]
fn decode_keeps_unknown_scancodes() {
    // 0xEE is not in the lookup table; decoding must not drop it.
    let set = decode(&[0, 0, 0xee, 0, 0, 0, 0, 0]).unwrap();
    assert!(set.contains(0xee));
    assert!(key_name(0xee).is_none());
}

#[test]
fn decode_rejects_wrong_length() {
    assert!(decode(&[]).is_none());
    assert!(decode(&[0, 0, 0x59]).is_none());
    assert!(decode(&[0; 7]).is_none());
    assert!(decode(&[0; 9]).is_none());
}

#[test]
fn scancode_sets_compare_as_sets() {
    let a = decode(&[0, 0, 0x59, 0x58, 0, 0, 0, 0]).unwrap();
    let b = decode(&[0, 0, 0, 0, 0, 0, 0x58, 0x59]).unwrap();
    assert_eq!(a, b);

    let c = decode(&[0, 0, 0x59, 0, 0, 0, 0, 0]).unwrap();
    assert_ne!(a, c);
    assert_eq!(ScancodeSet::empty(), decode(&[0; 8]).unwrap());
}

// Scancode table (compatibility contract - exact byte values)

#[test]
fn scancode_table_digits() {
    assert_eq!(key_name(0x59), Some("1"));
    assert_eq!(key_name(0x5a), Some("2"));
    assert_eq!(key_name(0x5b), Some("3"));
    assert_eq!(key_name(0x5c), Some("4"));
    assert_eq!(key_name(0x5d), Some("5"));
    assert_eq!(key_name(0x5e), Some("6"));
    assert_eq!(key_name(0x5f), Some("7"));
    assert_eq!(key_name(0x60), Some("8"));
    assert_eq!(key_name(0x61), Some("9"));
    assert_eq!(key_name(0x62), Some("0"));
    assert_eq!(key_name(0x63), Some("."));
}

#[test]
fn scancode_table_operators_and_controls() {
    assert_eq!(key_name(0x54), Some("/"));
    assert_eq!(key_name(0x55), Some("*"));
    assert_eq!(key_name(0x56), Some("-"));
    assert_eq!(key_name(0x57), Some("+"));
    assert_eq!(key_name(0x58), Some("Enter"));
    assert_eq!(key_name(0x2a), Some("Bksp"));
    assert_eq!(key_name(0x2b), Some("Tab"));
    assert_eq!(key_name(0x01), Some("ErrRollOver"));
}

#[test]
fn scancode_table_numlock_off_block() {
    assert_eq!(key_name(0x49), Some("Ins"));
    assert_eq!(key_name(0x4a), Some("Home"));
    assert_eq!(key_name(0x4b), Some("PgUp"));
    assert_eq!(key_name(0x4c), Some("Del"));
    assert_eq!(key_name(0x4d), Some("End"));
    assert_eq!(key_name(0x4e), Some("PgDn"));
    assert_eq!(key_name(0x4f), Some("Right"));
    assert_eq!(key_name(0x50), Some("Left"));
    assert_eq!(key_name(0x51), Some("Down"));
    assert_eq!(key_name(0x52), Some("Up"));
}

#[test]
fn scancode_table_unmapped_codes() {
    assert_eq!(key_name(0x00), None);
    assert_eq!(key_name(0x04), None); // plain 'a' - not a keypad key
    assert_eq!(key_name(0x53), None); // NumLock is deliberately unmapped
    assert_eq!(key_name(0xff), None);
}
