use super::*;

#[test]
fn bin_uses_server_field_names() {
    let bin: Bin = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "No Bin",
        "owner": 9,
        "createdAt": "2024-05-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(bin.id, BinId(3));
    assert_eq!(bin.owner, 9);
    assert!(bin.is_default());
}

#[test]
fn document_accepts_server_payload_and_detaches_url() {
    let doc: Document = serde_json::from_value(serde_json::json!({
        "id": 11,
        "name": "scan.pdf",
        "referenceName": "passport",
        "bin": 3,
        "url": "",
        "extract": "text",
        "createdAt": "2024-05-01T10:00:00Z",
        "language": "eng"
    }))
    .unwrap();
    assert_eq!(doc.id, DocumentId(11));
    assert_eq!(doc.reference_name, "passport");
    assert_eq!(doc.url.as_deref(), Some(""));
    assert_eq!(doc.language.as_deref(), Some("eng"));

    let doc = doc.detached();
    assert_eq!(doc.url, None);
    assert_eq!(doc.extension(), Some("pdf"));
}

#[test]
fn extension_requires_a_stem_and_suffix() {
    let mut doc: Document = serde_json::from_value(serde_json::json!({
        "id": 1, "name": ".bashrc", "referenceName": "r", "bin": 1,
        "createdAt": "2024-05-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(doc.extension(), None);
    doc.name = "archive.".to_string();
    assert_eq!(doc.extension(), None);
}

#[test]
fn language_parsing() {
    assert_eq!("ENG".parse::<Language>(), Ok(Language::Eng));
    assert_eq!("nep".parse::<Language>(), Ok(Language::Nep));
    assert!("fra".parse::<Language>().is_err());
    assert_eq!(serde_json::to_string(&Language::Nep).unwrap(), "\"nep\"");
}
