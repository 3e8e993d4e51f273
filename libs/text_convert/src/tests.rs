use super::*;

const PRINTABLE: &str = " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

fn latin1() -> String {
    (0u8..=u8::MAX).map(char::from).collect()
}

fn round_trip_core(text: &str, encode: Mode) {
    let encoded = try_convert(text, encode).expect("encoding failed");
    let back = try_convert(&encoded, encode.inverse()).expect("decoding failed");

    assert_eq!(back, text, "{encode} round trip");
}

#[test]
fn round_trip_printable() {
    for mode in Mode::ALL.into_iter().filter(|m| m.is_encode()) {
        round_trip_core(PRINTABLE, mode);
    }
}

#[test]
fn round_trip_latin1() {
    let text = latin1();
    for mode in Mode::ALL.into_iter().filter(|m| m.is_encode()) {
        round_trip_core(&text, mode);
    }
}

#[test]
fn round_trip_wide_chars() {
    round_trip_core("\u{3042}\u{1F600}", Mode::TextToBinary);
    round_trip_core("\u{3042}\u{1F600}", Mode::TextToAscii);
    round_trip_core("\u{3042}\u{1F600}", Mode::TextToHex);
}

#[test]
fn single_char_encodings() {
    assert_eq!(convert("A", Mode::TextToBinary).output, "01000001");
    assert_eq!(convert("A", Mode::TextToAscii).output, "65");
    assert_eq!(convert("A", Mode::TextToHex).output, "41");
    assert_eq!(convert("A", Mode::TextToBase64).output, "QQ==");
}

#[test]
fn multi_char_encodings() {
    assert_eq!(convert("Hi", Mode::TextToBinary).output, "01001000 01101001");
    assert_eq!(convert("Hi", Mode::TextToAscii).output, "72 105");
    assert_eq!(convert("\n!", Mode::TextToHex).output, "0a 21");
    assert_eq!(convert("Hello", Mode::TextToBase64).output, "SGVsbG8=");
}

#[test]
fn decodes_known_values() {
    assert_eq!(convert("01001000 01101001", Mode::BinaryToText).output, "Hi");
    assert_eq!(convert("72 105", Mode::AsciiToText).output, "Hi");
    assert_eq!(convert("48 69", Mode::HexToText).output, "Hi");
    assert_eq!(convert("4A 6b", Mode::HexToText).output, "Jk");
    assert_eq!(convert("SGVsbG8=", Mode::Base64ToText).output, "Hello");
}

#[test]
fn short_binary_tokens_decode() {
    assert_eq!(convert("1000001", Mode::BinaryToText).output, "A");
}

#[test]
fn extra_whitespace_between_tokens() {
    let result = convert("  72\t105 \n", Mode::AsciiToText);
    assert_eq!(result.output, "Hi");
    assert_eq!(result.warning, None);
}

#[test]
fn empty_input_every_mode() {
    for mode in Mode::ALL {
        let result = convert("", mode);
        assert_eq!(result, ConversionResult::default(), "{mode}");
    }
}

#[test]
fn whitespace_only_decodes_to_empty() {
    for mode in Mode::ALL.into_iter().filter(|m| !m.is_encode()) {
        let result = convert(" \n ", mode);
        assert_eq!(result, ConversionResult::default(), "{mode}");
    }
}

#[test]
fn malformed_base64() {
    let result = convert("not base64!!", Mode::Base64ToText);
    assert_eq!(result.output, "");
    assert_eq!(
        result.warning.as_deref(),
        Some("Invalid Base64 string. Unable to decode.")
    );

    let err = try_convert("not base64!!", Mode::Base64ToText).expect_err("must be invalid");
    assert!(matches!(err, Error::InvalidBase64(_)), "{err:?}");
}

#[test]
fn forgiving_base64() {
    assert_eq!(convert("SGVs bG8", Mode::Base64ToText).output, "Hello");
    assert_eq!(convert("QQ\n==", Mode::Base64ToText).output, "A");
    assert_eq!(convert("QR==", Mode::Base64ToText).output, "A");
    assert_eq!(convert("QUI=", Mode::Base64ToText).output, "AB");
}

#[test]
fn base64_padding_must_complete_quantum() {
    for input in ["QQ=", "QUJD=", "Q===", "QQ===", "QQ==QQ==", "Q=Q="] {
        let result = convert(input, Mode::Base64ToText);
        assert_eq!(result.output, "", "{input:?}");
        assert_eq!(
            result.warning.as_deref(),
            Some("Invalid Base64 string. Unable to decode."),
            "{input:?}"
        );
    }
}

#[test]
fn base64_bad_length_fails() {
    let result = convert("QUJDR", Mode::Base64ToText);
    assert!(result.has_warning());
    assert_eq!(result.output, "");
}

#[test]
fn base64_rejects_wide_chars() {
    let result = convert("\u{3042}", Mode::TextToBase64);
    assert_eq!(result.output, "");
    assert_eq!(
        result.warning.as_deref(),
        Some("Input contains characters outside the Latin-1 range. Unable to encode.")
    );

    let err = try_convert("a\u{3042}", Mode::TextToBase64).expect_err("must be out of range");
    assert!(matches!(err, Error::OutOfRange { ch: '\u{3042}' }), "{err:?}");
}

#[test]
fn invalid_tokens_reject_whole_input() {
    let cases = [
        (Mode::BinaryToText, "01000001 012", "Invalid binary string. Unable to decode."),
        (Mode::AsciiToText, "65 6x", "Invalid ASCII string. Unable to decode."),
        (Mode::HexToText, "41 zz", "Invalid hexadecimal string. Unable to decode."),
    ];

    for (mode, input, warning) in cases {
        let result = convert(input, mode);
        assert_eq!(result.output, "", "{mode}");
        assert_eq!(result.warning.as_deref(), Some(warning), "{mode}");
    }
}

#[test]
fn invalid_token_names_token() {
    let err = try_convert("65 -1", Mode::AsciiToText).expect_err("negative code");
    match err {
        Error::InvalidToken { format, token } => {
            assert_eq!(format, Format::Ascii);
            assert_eq!(token, "-1");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn signed_and_out_of_range_tokens_fail() {
    try_convert("+65", Mode::AsciiToText).expect_err("signs are not allowed");
    try_convert("55296", Mode::AsciiToText).expect_err("surrogates are not chars");
    try_convert("1114112", Mode::AsciiToText).expect_err("above char::MAX");
    try_convert("ffffffffff", Mode::HexToText).expect_err("overflows u32");
}

#[test]
fn mode_switch_does_not_chain() {
    let mut state = ConverterState::new(Mode::TextToBinary);
    state.set_input("A");
    assert_eq!(state.output(), "01000001");
    assert_eq!(state.warning(), None);

    state.set_mode(Mode::BinaryToText);
    assert_eq!(state.input(), "A");
    assert_eq!(state.output(), "");
    assert_eq!(
        state.warning(),
        Some("Invalid binary string. Unable to decode.")
    );
}

#[test]
fn warning_cleared_on_next_conversion() {
    let mut state = ConverterState::new(Mode::Base64ToText);
    state.set_input("not base64!!");
    assert!(state.result().has_warning());

    state.set_input("QQ==");
    assert_eq!(state.output(), "A");
    assert_eq!(state.warning(), None);

    state.set_input("!!");
    state.set_mode(Mode::TextToAscii);
    assert_eq!(state.output(), "33 33");
    assert_eq!(state.warning(), None);
}

#[test]
fn mode_parse_and_display() {
    for mode in Mode::ALL {
        assert_eq!(mode.to_string().parse::<Mode>().ok(), Some(mode));
    }

    assert_eq!("text-to-hex".parse::<Mode>().ok(), Some(Mode::TextToHex));
    assert_eq!("BASE64_TO_TEXT".parse::<Mode>().ok(), Some(Mode::Base64ToText));
    assert_eq!(" asciiToText ".parse::<Mode>().ok(), Some(Mode::AsciiToText));
    "textToOctal".parse::<Mode>().expect_err("no such mode");
    "textToBinaryX".parse::<Mode>().expect_err("trailing garbage");
}

#[test]
fn mode_separators_only_between_words() {
    assert_eq!("hex_to_text".parse::<Mode>().ok(), Some(Mode::HexToText));
    assert_eq!("Text-To-Ascii".parse::<Mode>().ok(), Some(Mode::TextToAscii));

    for input in [
        "t-e-x-tToBinary",
        "text-to_binary",
        "text-toBinary",
        "-textToBinary",
        "textToBinary-",
        "text--to-binary",
        "base-64-to-text",
    ] {
        input.parse::<Mode>().expect_err(input);
    }
}

#[test]
fn mode_pairs() {
    for mode in Mode::ALL {
        assert_eq!(mode.inverse().inverse(), mode);
        assert_ne!(mode.is_encode(), mode.inverse().is_encode());
        assert_eq!(mode.format(), mode.inverse().format());
    }
}
