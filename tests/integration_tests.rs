use easylink_layer::{
    address::IeeeAddress,
    config::LayerConfig,
    layer::{EasyLinkLayer, LayerError},
    packet::{ms_to_radio_time, MAX_DATA_LENGTH},
    radio::{CtrlOption, PhyType, Status},
};

use mock::{Call, CallKind, MockRadio};

// Test helper to create a layer
fn create_test_layer(filtering: bool) -> EasyLinkLayer<MockRadio> {
    let config = if filtering {
        LayerConfig::with_address_filtering()
    } else {
        LayerConfig::new()
    };
    EasyLinkLayer::new(MockRadio::new(), config)
}

const HUB: IeeeAddress = IeeeAddress::new([0x00, 0x12, 0x4B, 0x00, 0x11, 0x22, 0x33, 0x44]);

#[test]
fn test_begin_without_filtering() {
    let mut layer = create_test_layer(false);
    layer.begin().unwrap();

    assert!(!layer.is_address_filtering());
    assert_eq!(layer.radio().calls.as_slice(), &[Call::Init(PhyType::Gfsk50Kbps)]);
}

#[test]
fn test_begin_with_filtering_programs_filter() {
    let mut layer = create_test_layer(true);
    layer.begin().unwrap();

    let calls = &layer.radio().calls;
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], Call::Init(PhyType::Gfsk50Kbps));
    assert_eq!(calls[1], Call::SetCtrl(CtrlOption::AddrSize, 8));
    match &calls[2] {
        Call::EnableRxAddrFilter(table, addr_size, num_addrs) => {
            assert_eq!(table.as_slice(), &[0u8; 24]);
            assert_eq!(*addr_size, 8);
            assert_eq!(*num_addrs, 3);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn test_begin_uses_configured_phy_and_initial_filter() {
    let config = LayerConfig::with_address_filtering()
        .phy(PhyType::Lrm625Bps)
        .filter_slot(2, HUB);
    let mut layer = EasyLinkLayer::new(MockRadio::new(), config);
    layer.begin().unwrap();

    assert_eq!(layer.radio().calls[0], Call::Init(PhyType::Lrm625Bps));
    let table = layer.radio().last_filter_table().unwrap();
    assert_eq!(&table[16..24], HUB.as_bytes());
    assert_eq!(layer.address_filter(2).unwrap(), HUB);
}

#[test]
fn test_begin_reports_driver_failure() {
    let mut radio = MockRadio::new();
    radio.fail_with(Status::ConfigError);
    let mut layer = EasyLinkLayer::new(radio, LayerConfig::with_address_filtering());

    assert_eq!(layer.begin(), Err(LayerError::Radio(Status::ConfigError)));
    // Filtering setup is skipped once init fails
    assert_eq!(layer.radio().calls.len(), 1);
}

#[test]
fn test_begin_stops_at_addr_size_failure() {
    let mut radio = MockRadio::new();
    radio.fail_on(CallKind::SetCtrl, Status::CmdError);
    let mut layer = EasyLinkLayer::new(radio, LayerConfig::with_address_filtering());

    assert_eq!(layer.begin(), Err(LayerError::Radio(Status::CmdError)));
    assert!(layer.radio().called(CallKind::Init));
    assert!(!layer.radio().called(CallKind::EnableRxAddrFilter));
}

#[test]
fn test_begin_reports_filter_failure() {
    let mut radio = MockRadio::new();
    radio.fail_on(CallKind::EnableRxAddrFilter, Status::ParamError);
    let mut layer = EasyLinkLayer::new(radio, LayerConfig::with_address_filtering());

    assert_eq!(layer.begin(), Err(LayerError::Radio(Status::ParamError)));
    assert_eq!(layer.radio().calls.len(), 3);
}

#[test]
fn test_address_filter_driver_failure_keeps_stored_slot() {
    let mut radio = MockRadio::new();
    radio.fail_on(CallKind::EnableRxAddrFilter, Status::CmdError);
    let mut layer = EasyLinkLayer::new(radio, LayerConfig::with_address_filtering());
    assert_eq!(layer.begin(), Err(LayerError::Radio(Status::CmdError)));

    let error = layer.set_address_filter(2, IeeeAddress::UNUSED).unwrap_err();
    assert_eq!(error, LayerError::Radio(Status::CmdError));
    assert!(!error.is_param_error());

    // The table is updated before the driver is asked to apply it
    assert_eq!(layer.address_filter(2).unwrap(), IeeeAddress::UNUSED);
    let table = layer.radio().last_filter_table().unwrap();
    assert_eq!(&table[16..], IeeeAddress::UNUSED.as_bytes());
}

#[test]
fn test_transmit() {
    let mut layer = create_test_layer(false);
    layer.begin().unwrap();

    let data = b"Hello, EasyLink!";
    layer.transmit(data).unwrap();

    let radio = layer.radio();
    assert_eq!(radio.get_last_tx(), Some(&data[..]));
    let packet = radio.last_tx.as_ref().unwrap();
    assert_eq!(packet.len as usize, data.len());
    assert_eq!(packet.abs_time, 0);
}

#[test]
fn test_transmit_max_length() {
    let mut layer = create_test_layer(false);

    let data = [0xA5; MAX_DATA_LENGTH];
    layer.transmit(&data).unwrap();
    assert_eq!(layer.radio().get_last_tx(), Some(&data[..]));
}

#[test]
fn test_transmit_rejects_oversized_payload() {
    let mut layer = create_test_layer(false);

    let data = [0u8; MAX_DATA_LENGTH + 1];
    let error = layer.transmit(&data).unwrap_err();
    assert_eq!(error, LayerError::PayloadTooLarge);
    assert!(error.is_param_error());
    assert_eq!(error.status(), Status::ParamError);
    // Driver never called
    assert!(layer.radio().calls.is_empty());
}

#[test]
fn test_transmit_uses_destination() {
    let mut layer = create_test_layer(false);

    layer.set_tx_destination(HUB);
    assert_eq!(layer.tx_destination(), HUB);

    layer.transmit(b"one").unwrap();
    assert_eq!(&layer.radio().last_tx.as_ref().unwrap().dst_addr, HUB.as_bytes());

    // Destination is kept across transmissions
    layer.transmit(b"two").unwrap();
    assert_eq!(&layer.radio().last_tx.as_ref().unwrap().dst_addr, HUB.as_bytes());
}

#[test]
fn test_transmit_driver_error() {
    let mut radio = MockRadio::new();
    radio.fail_with(Status::TxError);
    let mut layer = EasyLinkLayer::new(radio, LayerConfig::new());

    let error = layer.transmit(b"data").unwrap_err();
    assert_eq!(error, LayerError::Radio(Status::TxError));
    assert!(!error.is_param_error());
    assert_eq!(error.status(), Status::TxError);
}

#[test]
fn test_receive() {
    let mut layer = create_test_layer(false);
    layer
        .radio_mut()
        .set_rx_data(b"Reply", *HUB.as_bytes(), -72);

    let mut buffer = [0u8; MAX_DATA_LENGTH];
    let len = layer.receive(&mut buffer, 500).unwrap();

    assert_eq!(&buffer[..len], b"Reply");
    assert_eq!(layer.rx_destination(), HUB);
    assert_eq!(layer.rx_rssi(), -72);

    let request = layer.radio().last_rx_request.as_ref().unwrap();
    assert_eq!(request.rx_timeout, ms_to_radio_time(500));
    assert_eq!(request.abs_time, 0);
}

#[test]
fn test_receive_default_window() {
    let config = LayerConfig::new().rx_timeout_ms(750);
    let mut layer = EasyLinkLayer::new(MockRadio::new(), config);
    layer.radio_mut().set_rx_data(b"x", [0; 8], -40);

    let mut buffer = [0u8; 8];
    assert_eq!(layer.receive_default(&mut buffer).unwrap(), 1);
    let request = layer.radio().last_rx_request.as_ref().unwrap();
    assert_eq!(request.rx_timeout, 750 * 4_000);
}

#[test]
fn test_receive_timeout() {
    let mut layer = create_test_layer(false);

    let mut buffer = [0u8; 16];
    let error = layer.receive(&mut buffer, 10).unwrap_err();
    assert_eq!(error, LayerError::Radio(Status::RxTimeout));
    assert_eq!(buffer, [0u8; 16]);
}

#[test]
fn test_receive_buffer_too_small() {
    let mut layer = create_test_layer(false);
    layer.radio_mut().set_rx_data(b"0123456789", [0; 8], -60);

    let mut buffer = [0u8; 4];
    let error = layer.receive(&mut buffer, 100).unwrap_err();
    assert_eq!(error, LayerError::BufferTooSmall);
    assert_eq!(buffer, [0u8; 4]);
    // Metadata still reflects the packet
    assert_eq!(layer.rx_rssi(), -60);
}

#[test]
fn test_receive_rejects_oversized_driver_length() {
    let mut layer = create_test_layer(false);
    layer.radio_mut().set_rx_data(&[0x11; 200], [0; 8], -60);

    let mut buffer = [0u8; 255];
    assert_eq!(
        layer.receive(&mut buffer, 100),
        Err(LayerError::PayloadTooLarge)
    );
}

#[test]
fn test_receive_vec() {
    let mut layer = create_test_layer(false);
    layer.radio_mut().set_rx_data(b"owned", [0; 8], -30);

    let payload = layer.receive_vec(100).unwrap();
    assert_eq!(payload.as_slice(), b"owned");
}

#[test]
fn test_address_filter_update() {
    let mut layer = create_test_layer(true);
    layer.begin().unwrap();

    layer.set_address_filter(1, HUB).unwrap();
    assert_eq!(layer.address_filter(1).unwrap(), HUB);
    assert_eq!(layer.address_filter(0).unwrap(), IeeeAddress::BROADCAST);

    let table = layer.radio().last_filter_table().unwrap();
    assert_eq!(&table[..8], &[0u8; 8]);
    assert_eq!(&table[8..16], HUB.as_bytes());
    assert_eq!(&table[16..], &[0u8; 8]);
}

#[test]
fn test_address_filter_invalid_slot() {
    let mut layer = create_test_layer(true);
    layer.begin().unwrap();
    let calls_before = layer.radio().calls.len();

    assert_eq!(layer.set_address_filter(3, HUB), Err(LayerError::InvalidSlot));
    assert_eq!(layer.address_filter(3), Err(LayerError::InvalidSlot));
    assert_eq!(layer.radio().calls.len(), calls_before);
}

#[test]
fn test_address_filter_requires_filtering() {
    let mut layer = create_test_layer(false);
    layer.begin().unwrap();

    let error = layer.set_address_filter(0, HUB).unwrap_err();
    assert_eq!(error, LayerError::FilteringDisabled);
    assert_eq!(error.status(), Status::ParamError);
    assert_eq!(layer.address_filter(0), Err(LayerError::FilteringDisabled));
    assert_eq!(layer.radio().calls.len(), 1);
}

#[test]
fn test_local_address() {
    let mut layer = create_test_layer(false);

    let address = layer.local_address().unwrap();
    assert_eq!(address.to_u64(), 0x6ACD_270A_004B_1200);
}

#[test]
fn test_radio_settings_passthrough() {
    let mut layer = create_test_layer(false);

    layer.set_frequency(915_000_000).unwrap();
    assert_eq!(layer.frequency(), 915_000_000);

    layer.set_rf_power(10).unwrap();
    assert_eq!(layer.rf_power().unwrap(), 10);

    layer.abort().unwrap();
    let radio = layer.release();
    assert_eq!(
        radio.calls.as_slice(),
        &[Call::SetFrequency(915_000_000), Call::SetRfPower(10), Call::Abort]
    );
}
