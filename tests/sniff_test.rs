use mailsift::{Format, decode_text, sniff_format};

#[test]
fn test_extension_match() {
    assert_eq!(sniff_format(Some("relatorio.pdf"), b""), Format::Pdf);
    assert_eq!(sniff_format(Some("mensagem.eml"), b""), Format::Eml);
    assert_eq!(sniff_format(Some("notas.txt"), b""), Format::PlainText);
    assert_eq!(sniff_format(Some("notas.text"), b""), Format::PlainText);
}

#[test]
fn test_extension_is_case_insensitive() {
    assert_eq!(sniff_format(Some("SCAN.PDF"), b""), Format::Pdf);
    assert_eq!(sniff_format(Some("Caixa.Eml"), b""), Format::Eml);
    assert_eq!(sniff_format(Some("LEIA.TXT"), b""), Format::PlainText);
}

#[test]
fn test_extension_wins_over_signature() {
    assert_eq!(sniff_format(Some("falso.txt"), b"%PDF-1.7"), Format::PlainText);
}

#[test]
fn test_signature_fallback() {
    assert_eq!(sniff_format(None, b"%PDF-1.4\n..."), Format::Pdf);
    assert_eq!(sniff_format(Some("upload.bin"), b"%PDF-1.4"), Format::Pdf);
    assert_eq!(sniff_format(Some("sem_extensao"), b"%PDF"), Format::Pdf);
}

#[test]
fn test_unsupported() {
    assert_eq!(sniff_format(None, b""), Format::Unsupported);
    assert_eq!(sniff_format(Some("planilha.xlsx"), b"PK\x03\x04"), Format::Unsupported);
    assert_eq!(sniff_format(Some(""), b"%PD"), Format::Unsupported);
    assert_eq!(sniff_format(Some("arquivo.pdf.zip"), b""), Format::Unsupported);
}

#[test]
fn test_total_over_arbitrary_input() {
    let names = [None, Some(""), Some("."), Some("a."), Some(".pdf"), Some("ç.EML")];
    let buffers: [&[u8]; 4] = [b"", b"\xff\xfe\x00", b"%PDF", b"\x00\x00\x00\x00\x00"];

    for name in names {
        for bytes in buffers {
            let _ = sniff_format(name, bytes);
        }
    }
    assert_eq!(sniff_format(Some("ç.EML"), b""), Format::Eml);
    assert_eq!(sniff_format(Some(".pdf"), b""), Format::Pdf);
}

#[test]
fn test_decode_utf8() {
    assert_eq!(decode_text("Olá, mundo".as_bytes()), "Olá, mundo");
}

#[test]
fn test_decode_latin1_fallback() {
    assert_eq!(decode_text(b"Ol\xe1, cora\xe7\xe3o"), "Olá, coração");
}

#[test]
fn test_decode_never_fails() {
    assert_eq!(decode_text(b""), "");

    let every_byte: Vec<u8> = (0..=255).collect();
    let text = decode_text(&every_byte);
    assert_eq!(text.chars().count(), 256);
}

#[test]
fn test_format_display() {
    assert_eq!(Format::Pdf.to_string(), "pdf");
    assert_eq!(Format::PlainText.to_string(), "text");
}
