//! Test-only helpers that build minimal PDF fixtures in memory.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

/// Build a valid PDF with `pages` pages, each carrying a unique
/// `Page <n>` marker in its content stream (1-based).
pub fn sample_pdf_bytes(pages: u32) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for n in 1..=pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        format!("Page {}", n).into_bytes(),
                        lopdf::StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(pages as i64)),
        ("Kids", Object::Array(kids)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Write a sample PDF into `dir` and return its path.
pub fn write_sample_pdf(dir: &Path, name: &str, pages: u32) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, sample_pdf_bytes(pages)).unwrap();
    path
}

/// Content stream bytes of every page, in page order.
pub fn page_streams(doc: &Document) -> Vec<Vec<u8>> {
    doc.get_pages()
        .into_iter()
        .map(|(_, page_id)| {
            let page = doc.get_dictionary(page_id).unwrap();
            let contents_id = match page.get(b"Contents").unwrap() {
                Object::Reference(r) => *r,
                other => panic!("unexpected Contents entry: {:?}", other),
            };
            match doc.get_object(contents_id).unwrap() {
                Object::Stream(stream) => stream.content.clone(),
                other => panic!("unexpected content object: {:?}", other),
            }
        })
        .collect()
}
