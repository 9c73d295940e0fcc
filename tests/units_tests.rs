//! Integration tests for the example MAC, memory and PE units.

use action_counts::common::Error;
use action_counts::config::PeConfig;
use action_counts::units::mac::{MAC_GATED, MAC_RANDOM};
use action_counts::units::memory::{READ_RANDOM, WRITE_RANDOM};
use action_counts::units::pe::{PE_MAC, PE_SPAD};
use action_counts::units::{Mac, Memory, Pe};

/// Creates a PE configuration with a four-bank scratchpad.
fn create_pe_config() -> PeConfig {
    PeConfig {
        name: "PE0".to_string(),
        bit_width: 16,
        mac_n_pipe_stage: 2,
        mem_depth: 16,
        nbanks: 4,
    }
}

/// Tests an ungated MAC multiplies and records `mac_random`.
#[test]
fn test_mac_random() {
    let mac = Mac::new(16, 2);
    let mut node = mac.build("mac").unwrap();

    assert_eq!(mac.calc(&mut node, 3, 7, 5).unwrap(), 26);
    assert_eq!(node.counter_value(MAC_RANDOM, &[]).unwrap(), 1);
    assert_eq!(node.counter_value(MAC_GATED, &[]).unwrap(), 0);
    assert_eq!(node.class_tag(), Some("MAC"));
    assert_eq!(
        node.hardware_attributes().unwrap().get("n_pipe_stage"),
        Some(&"2".to_string())
    );
}

/// Tests a zero operand gates the MAC.
#[test]
fn test_mac_gated() {
    let mac = Mac::new(16, 1);
    let mut node = mac.build("mac").unwrap();

    assert_eq!(mac.calc(&mut node, 0, 9, 4).unwrap(), 4);
    assert_eq!(mac.calc(&mut node, 9, 0, -4).unwrap(), -4);
    assert_eq!(node.counter_value(MAC_GATED, &[]).unwrap(), 2);
    assert_eq!(node.counter_value(MAC_RANDOM, &[]).unwrap(), 0);
}

/// Tests MAC results wrap at the configured bit width.
#[test]
fn test_mac_wraps_to_bit_width() {
    let mac = Mac::new(8, 1);
    let mut node = mac.build("mac").unwrap();
    assert_eq!(mac.calc(&mut node, 16, 8, 1).unwrap(), -127);
}

/// Tests memory reads and writes are recorded per bank.
#[test]
fn test_memory_bank_counts() {
    let mut mem = Memory::new(16, 8, 2);
    let mut node = mem.build("glb").unwrap();

    assert_eq!(mem.read(&mut node, 3).unwrap(), 3);
    assert_eq!(mem.read(&mut node, 5).unwrap(), 5);
    mem.write(&mut node, 4, 42).unwrap();

    assert_eq!(node.counter_value(READ_RANDOM, &[1]).unwrap(), 2);
    assert_eq!(node.counter_value(READ_RANDOM, &[0]).unwrap(), 0);
    assert_eq!(node.counter_value(WRITE_RANDOM, &[0]).unwrap(), 1);
    assert_eq!(mem.peek(4), Some(42));
}

/// Tests out-of-range addresses fail before anything is recorded.
#[test]
fn test_memory_address_out_of_range() {
    let mut mem = Memory::new(16, 2, 2);
    let mut node = mem.build("glb").unwrap();
    let before = node.clone();

    assert!(matches!(
        mem.read(&mut node, 2),
        Err(Error::AddressOutOfRange { address: 2, depth: 2, .. })
    ));
    assert!(mem.write(&mut node, 7, 1).is_err());
    assert_eq!(node, before);
}

/// Tests preloading memory contents and naming the memory on overrun.
#[test]
fn test_memory_load() {
    let mut mem = Memory::new(16, 4, 1);
    let node = mem.build("glb").unwrap();
    let before = node.clone();

    mem.load(&node, 1, &[10, 20]).unwrap();
    assert_eq!(mem.peek(1), Some(10));
    assert_eq!(mem.peek(2), Some(20));

    let err = mem.load(&node, 3, &[1, 2]).unwrap_err();
    assert!(matches!(
        err,
        Error::AddressOutOfRange { ref component, address: 4, depth: 4 } if component == "glb"
    ));
    assert_eq!(mem.peek(3), Some(3));
    assert_eq!(node, before);
}

/// Tests a zero-bank memory cannot be built.
#[test]
fn test_memory_zero_banks() {
    let mem = Memory::new(16, 4, 0);
    assert!(mem.build("bad").is_err());
}

/// Tests the PE subtree layout.
#[test]
fn test_pe_build() {
    let pe = Pe::new(&create_pe_config());
    let node = pe.build().unwrap();

    assert_eq!(node.name(), "PE0");
    assert!(!node.is_leaf());
    let names: Vec<&str> = node.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec![PE_MAC, PE_SPAD]);
}

/// Tests one PE job reads twice, runs the MAC twice and writes once.
#[test]
fn test_pe_process_job() {
    let mut pe = Pe::new(&create_pe_config());
    let mut node = pe.build().unwrap();

    let result = pe.process_job(&mut node, 3, 6, 5).unwrap();
    assert_eq!(result, 5);
    assert_eq!(pe.spad().peek(6), Some(5));

    let mac = node.child(PE_MAC).unwrap();
    assert_eq!(mac.counter_value(MAC_RANDOM, &[]).unwrap(), 1);
    assert_eq!(mac.counter_value(MAC_GATED, &[]).unwrap(), 1);

    let spad = node.child(PE_SPAD).unwrap();
    assert_eq!(spad.counter_value(READ_RANDOM, &[3]).unwrap(), 1);
    assert_eq!(spad.counter_value(READ_RANDOM, &[2]).unwrap(), 1);
    assert_eq!(spad.counter_value(WRITE_RANDOM, &[2]).unwrap(), 1);
}

/// Tests a bad operand address aborts the job without recording.
#[test]
fn test_pe_job_bad_address() {
    let mut pe = Pe::new(&create_pe_config());
    let mut node = pe.build().unwrap();
    let before = node.clone();

    assert!(matches!(
        pe.process_job(&mut node, 1, 99, 0),
        Err(Error::AddressOutOfRange { address: 99, .. })
    ));
    assert_eq!(node, before);
}

/// Tests a PE subtree missing its scratchpad is reported.
#[test]
fn test_pe_missing_child() {
    let mut pe = Pe::new(&create_pe_config());
    let mut node = action_counts::model::ComponentNode::container("PE0");

    let err = pe.process_job(&mut node, 0, 1, 0).unwrap_err();
    assert!(matches!(err, Error::MissingComponent { ref name, .. } if name == PE_SPAD));
}
