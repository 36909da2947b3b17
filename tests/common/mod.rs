//! Synthetic court-filing PDFs built with `lopdf`.
#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

pub const SUPREME_COURT_LINE: &str = "CORTE SUPREMA DE JUSTICIA DE LA NACION";
pub const OVD_LINE: &str = "Oficina de Violencia Domestica";

/// Writes a PDF with one page per entry; each page shows its lines top to bottom.
pub fn build_pdf(path: &Path, pages: &[Vec<String>]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 11.into()]));
            operations.push(Operation::new("Td", vec![50.into(), (780 - 16 * i as i64).into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(line.as_str())]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Text of a filing page; OVD pages carry both letterhead lines.
pub fn filing_page(index: usize, ovd: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if ovd {
        lines.push(SUPREME_COURT_LINE.to_string());
        lines.push(OVD_LINE.to_string());
        lines.push("Informe interdisciplinario de situacion de riesgo".to_string());
    } else {
        lines.push("Expediente civil en tramite".to_string());
    }
    lines.push(page_marker(index));
    lines
}

/// Unique marker printed on every page, used to check page order in the output.
pub fn page_marker(index: usize) -> String {
    format!("foja {:03}", index)
}

/// A filing of `page_count` pages where `ovd_pages` (zero-based) hold the report.
pub fn court_filing(page_count: usize, ovd_pages: &[usize]) -> Vec<Vec<String>> {
    (0..page_count)
        .map(|i| filing_page(i, ovd_pages.contains(&i)))
        .collect()
}

pub fn write_filing(path: &Path, page_count: usize, ovd_pages: &[usize]) {
    build_pdf(path, &court_filing(page_count, ovd_pages));
}
