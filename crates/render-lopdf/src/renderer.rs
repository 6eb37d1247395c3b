use crate::error::RenderError;
use crate::helpers::{self, FONT_RESOURCE};
use crate::page::PageSpec;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::fmt::Debug;

/// Serializes a fully described page into document bytes.
pub trait DocumentRenderer: Send + Sync + Debug {
    fn render(&self, page: &PageSpec) -> Result<Vec<u8>, RenderError>;
}

/// In-memory single-page PDF writer.
///
/// Output is a pure function of the [`PageSpec`]: no creation date or file
/// identifier is written, so equal specs produce byte-identical files.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfRenderer;

impl DocumentRenderer for LopdfRenderer {
    fn render(&self, page: &PageSpec) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });

        let mut xobjects = Dictionary::new();
        for (index, raster) in page.images.iter().enumerate() {
            let image_id = doc.add_object(helpers::image_stream(raster));
            xobjects.set(helpers::image_resource_name(index), image_id);
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { FONT_RESOURCE => font_id },
            "XObject" => xobjects,
        });

        let content = helpers::render_blocks(&page.blocks, page.images.len())?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page.size.width.into(), page.size.height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(helpers::to_win_ansi(&page.title)),
            "Producer" => Object::string_literal("boardpass"),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        log::debug!(
            "Rendered '{}' ({}x{}, {} blocks, {} images): {} bytes",
            page.title,
            page.size.width,
            page.size.height,
            page.blocks.len(),
            page.images.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}
