use crate::geometry::{split_with_overlap, trim_to_nominal};
use crate::options::{PageRange, SplitOptions, TrimOptions};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, Stream};
use std::collections::HashMap;
use std::path::Path;

/// Load a PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save a cropped document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, RecropError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Split every page of the document into a left and a right overlapping
/// slice. N input pages produce 2N output pages, left before right.
pub async fn split(doc: &Document, options: &SplitOptions) -> Result<Document> {
    options.validate()?;

    let doc = doc.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || split_sync(&doc, &options)).await?
}

/// Trim the scanner's excess capture off the left and bottom edges.
/// Processes the first page or all pages, per `options.pages`.
pub async fn trim(doc: &Document, options: &TrimOptions) -> Result<Document> {
    options.validate()?;

    let doc = doc.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || trim_sync(&doc, &options)).await?
}

fn split_sync(doc: &Document, options: &SplitOptions) -> Result<Document> {
    let spec = options.split_spec();
    let page_ids = ordered_pages(doc)?;

    let mut builder = OutputBuilder::new();
    for &page_id in &page_ids {
        let geometry = read_page_geometry(doc, page_id)?;
        let (left, right) = split_with_overlap(&spec, &geometry)?;

        // Two independent page copies of the same source page; the copy
        // cache still shares the underlying content and resource objects.
        builder.append_cropped(doc, page_id, &geometry, &left)?;
        builder.append_cropped(doc, page_id, &geometry, &right)?;
    }
    builder.finish()
}

fn trim_sync(doc: &Document, options: &TrimOptions) -> Result<Document> {
    let spec = options.trim_spec();
    let page_ids = ordered_pages(doc)?;
    let page_ids = match options.pages {
        PageRange::First => &page_ids[..1],
        PageRange::All => &page_ids[..],
    };

    let mut builder = OutputBuilder::new();
    for &page_id in page_ids {
        let geometry = read_page_geometry(doc, page_id)?;
        let rect = trim_to_nominal(&spec, &geometry)?;
        builder.append_cropped(doc, page_id, &geometry, &rect)?;
    }
    builder.finish()
}

/// Page object ids in document page order
fn ordered_pages(doc: &Document) -> Result<Vec<lopdf::ObjectId>> {
    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(RecropError::NoPages);
    }
    Ok(pages.values().copied().collect())
}

/// Read a page's MediaBox, following page-tree inheritance.
fn read_page_geometry(doc: &Document, page_id: lopdf::ObjectId) -> Result<PageGeometry> {
    let media_box = match inherited_page_attr(doc, page_id, b"MediaBox")? {
        Some(obj) => obj,
        None => {
            return Err(RecropError::Malformed(format!(
                "page {} {} has no MediaBox",
                page_id.0, page_id.1
            )));
        }
    };

    let corners = match resolve(doc, &media_box) {
        Object::Array(arr) if arr.len() == 4 => arr
            .iter()
            .map(extract_number)
            .collect::<Option<Vec<f32>>>(),
        _ => None,
    };
    let corners = corners.ok_or_else(|| {
        RecropError::Malformed(format!(
            "page {} {} has a malformed MediaBox",
            page_id.0, page_id.1
        ))
    })?;

    PageGeometry::new(
        corners[0],
        corners[1],
        corners[2] - corners[0],
        corners[3] - corners[1],
    )
}

/// Look up a page attribute, walking up the Parent chain for inheritable
/// entries (MediaBox, Resources, Rotate).
fn inherited_page_attr(
    doc: &Document,
    page_id: lopdf::ObjectId,
    key: &[u8],
) -> Result<Option<Object>> {
    let mut dict = doc.get_dictionary(page_id)?;
    loop {
        if let Ok(value) = dict.get(key) {
            return Ok(Some(value.clone()));
        }
        match dict.get(b"Parent") {
            Ok(parent) => dict = doc.get_dictionary(parent.as_reference()?)?,
            Err(_) => return Ok(None),
        }
    }
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Accumulates cropped page copies into a fresh output document.
///
/// Source objects are deep-copied on first use and cached, so two crops of
/// the same source page share one copy of its content stream and resources.
struct OutputBuilder {
    doc: Document,
    pages_id: lopdf::ObjectId,
    page_refs: Vec<Object>,
    cache: HashMap<lopdf::ObjectId, lopdf::ObjectId>,
}

impl OutputBuilder {
    fn new() -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_refs: Vec::new(),
            cache: HashMap::new(),
        }
    }

    /// Append one copy of a source page with its visible region set to
    /// `crop`.
    fn append_cropped(
        &mut self,
        source: &Document,
        page_id: lopdf::ObjectId,
        geometry: &PageGeometry,
        crop: &CropRect,
    ) -> Result<()> {
        let source_dict = source.get_dictionary(page_id)?.clone();

        let (media_ur_x, media_ur_y) = geometry.upper_right();
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_id));
        page_dict.set(
            "MediaBox",
            rect_array(geometry.origin_x, geometry.origin_y, media_ur_x, media_ur_y),
        );
        page_dict.set(
            "CropBox",
            rect_array(
                crop.lower_left.0,
                crop.lower_left.1,
                crop.upper_right.0,
                crop.upper_right.1,
            ),
        );

        for (key, value) in source_dict.iter() {
            match key.as_slice() {
                // Parent points into the source page tree; annotations carry
                // back-references to their page and would dangle.
                b"Type" | b"Parent" | b"MediaBox" | b"CropBox" | b"Annots" => continue,
                _ => {
                    let copied = self.copy_object(source, value)?;
                    page_dict.set(key.clone(), copied);
                }
            }
        }

        // Inheritable attributes may live on an ancestor node; pull them
        // down onto the copied page.
        for key in [b"Resources".as_slice(), b"Rotate".as_slice()] {
            if !page_dict.has(key) {
                if let Some(value) = inherited_page_attr(source, page_id, key)? {
                    let copied = self.copy_object(source, &value)?;
                    page_dict.set(key.to_vec(), copied);
                }
            }
        }

        let new_page_id = self.doc.add_object(page_dict);
        self.page_refs.push(Object::Reference(new_page_id));
        Ok(())
    }

    /// Deep copy an object from the source document, following references.
    /// The cache avoids copying the same indirect object twice.
    fn copy_object(&mut self, source: &Document, obj: &Object) -> Result<Object> {
        match obj {
            Object::Reference(id) => {
                if let Some(&new_id) = self.cache.get(id) {
                    return Ok(Object::Reference(new_id));
                }

                let referenced = source.get_object(*id)?.clone();
                let copied = self.copy_object(source, &referenced)?;

                let new_id = self.doc.add_object(copied);
                self.cache.insert(*id, new_id);

                Ok(Object::Reference(new_id))
            }
            Object::Dictionary(dict) => {
                let mut new_dict = Dictionary::new();
                for (key, value) in dict.iter() {
                    new_dict.set(key.clone(), self.copy_object(source, value)?);
                }
                Ok(Object::Dictionary(new_dict))
            }
            Object::Array(arr) => {
                let mut new_arr = Vec::new();
                for item in arr {
                    new_arr.push(self.copy_object(source, item)?);
                }
                Ok(Object::Array(new_arr))
            }
            Object::Stream(stream) => {
                let mut new_dict = Dictionary::new();
                for (key, value) in stream.dict.iter() {
                    new_dict.set(key.clone(), self.copy_object(source, value)?);
                }
                Ok(Object::Stream(Stream {
                    dict: new_dict,
                    content: stream.content.clone(),
                    allows_compression: stream.allows_compression,
                    start_position: None,
                }))
            }
            _ => Ok(obj.clone()),
        }
    }

    /// Assemble the page tree and catalog
    fn finish(self) -> Result<Document> {
        let mut doc = self.doc;

        if self.page_refs.is_empty() {
            return Err(RecropError::NoPages);
        }

        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        doc.objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));

        doc.trailer.set("Root", catalog_id);

        Ok(doc)
    }
}

fn rect_array(x0: f32, y0: f32, x1: f32, y1: f32) -> Object {
    Object::Array(vec![
        Object::Real(x0),
        Object::Real(y0),
        Object::Real(x1),
        Object::Real(y1),
    ])
}
