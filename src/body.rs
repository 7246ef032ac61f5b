//! Document-body reader: walks the parsed XML tree of a `w:body` and
//! produces document-model nodes plus diagnostics.
//!
//! This is the core of the pipeline. Each recognised element name maps to
//! a handler; handlers return [`ReadResult`]s that are concatenated in
//! source order, so sibling ordering in the output is authoritative.
//! Unrecognised names produce a warning unless they are on the ignored
//! list; malformed-but-parseable input never aborts the walk.
//!
//! Two pieces of state persist across one body traversal: the complex
//! field stack and the instruction-text buffer. Word encodes computed
//! constructs (HYPERLINK among them) as *complex fields* — `w:fldChar`
//! begin/separate/end sentinels threaded between sibling runs — so the
//! reader has to carry state from one run to the next to know that the
//! runs in between belong inside a link.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::content_types::ContentTypes;
use crate::dingbats;
use crate::documents::{
    Bookmark, Break, CommentReference, Hyperlink, Image, ImageSource, Node, NoteReference,
    NoteType, Paragraph, ParagraphIndent, Run, Size, Table, TableCell, TableRow, Text,
};
use crate::files::{FileAccess, Package};
use crate::numbering::{Numbering, NumberingLevel};
use crate::relationships::Relationships;
use crate::results::{ReadResult, warning};
use crate::styles::{Style, Styles};
use crate::uris;
use crate::xml::{XmlElement, XmlNode};

/// English Metric Units per pixel at 96 DPI.
pub(crate) const EMU_PER_PIXEL: f64 = 9525.0;

/// Content types browsers render natively; anything else gets a warning.
const BROWSER_FRIENDLY_CONTENT_TYPES: &[&str] = &[
    "image/png",
    "image/gif",
    "image/jpeg",
    "image/svg+xml",
    "image/tiff",
];

/// Element names that yield an empty result without a warning. Mostly
/// property containers the owning handler has already consumed, plus
/// bookkeeping markers with no document-model counterpart.
const IGNORED_ELEMENTS: &[&str] = &[
    "office-word:wrap",
    "v:shadow",
    "v:shapetype",
    "w:annotationRef",
    "w:bookmarkEnd",
    "w:sectPr",
    "w:proofErr",
    "w:lastRenderedPageBreak",
    "w:commentRangeStart",
    "w:commentRangeEnd",
    "w:del",
    "w:footnoteRef",
    "w:endnoteRef",
    "w:pPr",
    "w:rPr",
    "w:tblPr",
    "w:tblGrid",
    "w:trPr",
    "w:tcPr",
];

// ── Complex fields ───────────────────────────────────────────────────────────

/// One entry of the complex-field stack. A field is `Unknown` from its
/// `begin` until the `separate` sentinel reveals what its instruction
/// text meant.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ComplexField {
    Unknown,
    Hyperlink(HyperlinkKwargs),
}

/// The parsed payload of a HYPERLINK field code: external target or
/// internal anchor, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HyperlinkKwargs {
    href: Option<String>,
    anchor: Option<String>,
}

static EXTERNAL_HYPERLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*HYPERLINK "(.*)""#).expect("hardcoded pattern compiles"));
static INTERNAL_HYPERLINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*HYPERLINK\s+\\l\s+"(.*)""#).expect("hardcoded pattern compiles")
});

fn parse_hyperlink_field_code(instr_text: &str) -> Option<HyperlinkKwargs> {
    if let Some(captures) = EXTERNAL_HYPERLINK.captures(instr_text) {
        return Some(HyperlinkKwargs {
            href: Some(captures[1].to_string()),
            anchor: None,
        });
    }
    if let Some(captures) = INTERNAL_HYPERLINK.captures(instr_text) {
        return Some(HyperlinkKwargs {
            href: None,
            anchor: Some(captures[1].to_string()),
        });
    }
    None
}

// ── Reader ───────────────────────────────────────────────────────────────────

/// A resolved style reference: id and display name travel together so a
/// failed lookup can keep the id while dropping the name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ResolvedStyle {
    style_id: Option<String>,
    style_name: Option<String>,
}

/// The document-body reader.
///
/// Holds the lookup tables by reference and the traversal state by
/// value. One reader reads one body: the complex-field stack must not be
/// shared across documents. Reading is strictly sequential; to process
/// documents in parallel, build one reader per document.
pub struct BodyReader<'a> {
    styles: &'a Styles,
    numbering: &'a Numbering,
    relationships: &'a Relationships,
    content_types: &'a ContentTypes,
    package: Option<Arc<dyn Package>>,
    files: Option<Arc<dyn FileAccess>>,
    complex_field_stack: Vec<ComplexField>,
    current_instr_text: String,
}

impl<'a> BodyReader<'a> {
    pub fn new(
        styles: &'a Styles,
        numbering: &'a Numbering,
        relationships: &'a Relationships,
        content_types: &'a ContentTypes,
    ) -> Self {
        BodyReader {
            styles,
            numbering,
            relationships,
            content_types,
            package: None,
            files: None,
            complex_field_stack: Vec::new(),
            current_instr_text: String::new(),
        }
    }

    /// Attaches the opened package, enabling embedded-image resolution.
    pub fn with_package(mut self, package: Arc<dyn Package>) -> Self {
        self.package = Some(package);
        self
    }

    /// Attaches an external-file accessor, enabling linked-image
    /// resolution.
    pub fn with_files(mut self, files: Arc<dyn FileAccess>) -> Self {
        self.files = Some(files);
        self
    }

    /// Reads a sequence of sibling nodes in order. Non-element nodes
    /// (text outside `w:t`, whitespace) are filtered before dispatch.
    pub fn read_all(&mut self, nodes: &[XmlNode]) -> ReadResult {
        let mut results = Vec::new();
        for node in nodes {
            if let XmlNode::Element(element) = node {
                results.push(self.read(element));
            }
        }
        ReadResult::concat(results)
    }

    /// Dispatches one element to its handler.
    fn read(&mut self, element: &XmlElement) -> ReadResult {
        match element.name.as_str() {
            "w:t" => read_text(element),
            "w:r" => self.read_run(element),
            "w:p" => self.read_paragraph(element),
            "w:fldChar" => self.read_fld_char(element),
            "w:instrText" => self.read_instr_text(element),
            "w:tab" => ReadResult::success(Node::Tab),
            "w:noBreakHyphen" => text_node("\u{2011}"),
            "w:softHyphen" => text_node("\u{00AD}"),
            "w:sym" => read_symbol(element),
            "w:tbl" => self.read_table(element),
            "w:tr" => self.read_table_row(element),
            "w:tc" => self.read_table_cell(element),
            // Containers whose children read as if they were siblings of
            // the container itself.
            "w:ins" | "w:object" | "w:smartTag" | "w:drawing" | "v:group" | "v:rect"
            | "v:roundrect" | "v:textbox" | "w:txbxContent" => self.read_all(&element.children),
            "v:shape" => self.read_shape(element),
            "w:pict" => self.read_pict(element),
            "w:hyperlink" => self.read_hyperlink(element),
            "w:bookmarkStart" => read_bookmark_start(element),
            "w:br" => read_break(element),
            "wp:inline" | "wp:anchor" => self.read_inline_image(element),
            "v:imagedata" => self.read_imagedata(element, None),
            "w:footnoteReference" => read_note_reference(NoteType::Footnote, element),
            "w:endnoteReference" => read_note_reference(NoteType::Endnote, element),
            "w:commentReference" => read_comment_reference(element),
            "mc:AlternateContent" => self.read_alternate_content(element),
            "w:sdt" => self.read_sdt(element),
            name if IGNORED_ELEMENTS.contains(&name) => {
                log::trace!("ignored element: {name}");
                ReadResult::empty()
            }
            name => {
                log::debug!("unrecognised element: {name}");
                ReadResult::empty_with_message(warning(format!(
                    "An unrecognised element was ignored: {name}"
                )))
            }
        }
    }

    // ── Runs ─────────────────────────────────────────────────────────────────

    fn read_run(&mut self, element: &XmlElement) -> ReadResult {
        let properties = element.find_child_or_null("w:rPr");
        let vertical_alignment = properties
            .find_child_or_null("w:vertAlign")
            .attribute("w:val")
            .map(str::to_string);
        let font = properties
            .find_child_or_null("w:rFonts")
            .attribute("w:ascii")
            .map(str::to_string);
        let highlight_color = properties
            .find_child_or_null("w:highlight")
            .attribute("w:val")
            .map(str::to_string);
        let font_color = properties
            .find_child_or_null("w:color")
            .attribute("w:val")
            .map(str::to_string);
        // w:sz gives the size in half-points; non-integer values yield no size.
        let font_size = properties
            .find_child_or_null("w:sz")
            .attribute("w:val")
            .and_then(|value| value.parse::<i64>().ok())
            .map(|half_points| half_points as f64 / 2.0);

        let is_bold = read_boolean_element(properties.find_child("w:b"));
        let is_italic = read_boolean_element(properties.find_child("w:i"));
        let is_underline = read_underline_element(properties.find_child("w:u"));
        let is_strikethrough = read_boolean_element(properties.find_child("w:strike"));
        let is_all_caps = read_boolean_element(properties.find_child("w:caps"));
        let is_small_caps = read_boolean_element(properties.find_child("w:smallCaps"));

        let style = self.read_run_style(properties);
        let children = self.read_all(&element.children);
        // The wrap decision samples the field stack *after* this run's
        // children have been read: the run may itself contain the
        // fldChar that opens or closes the link.
        let hyperlink = self.current_hyperlink_kwargs().cloned();
        let children = children.map_elements(|children| match hyperlink {
            Some(kwargs) => vec![Node::Hyperlink(Hyperlink {
                children,
                href: kwargs.href,
                anchor: kwargs.anchor,
                target_frame: None,
            })],
            None => children,
        });

        ReadResult::map_results(style, children, |style, children| {
            let style = style.into_iter().next().unwrap_or_default();
            Node::Run(Run {
                children,
                style_id: style.style_id,
                style_name: style.style_name,
                is_bold,
                is_italic,
                is_underline,
                is_strikethrough,
                is_all_caps,
                is_small_caps,
                vertical_alignment,
                font,
                font_size,
                highlight_color,
                font_color,
            })
        })
    }

    fn read_run_style(&self, properties: &XmlElement) -> ReadResult<ResolvedStyle> {
        read_style_reference(properties, "w:rStyle", "Run", |style_id| {
            self.styles.find_character_style_by_id(style_id)
        })
    }

    // ── Paragraphs ───────────────────────────────────────────────────────────

    fn read_paragraph(&mut self, element: &XmlElement) -> ReadResult {
        let properties = element.find_child_or_null("w:pPr");
        let alignment = properties
            .find_child_or_null("w:jc")
            .attribute("w:val")
            .map(str::to_string);
        let indent = read_paragraph_indent(properties.find_child_or_null("w:ind"));
        let numbering_properties = properties.find_child_or_null("w:numPr");

        let style = self.read_paragraph_style(properties);
        let style_id = style
            .elements
            .first()
            .and_then(|resolved| resolved.style_id.clone());
        let numbering =
            self.read_numbering_properties(style_id.as_deref(), numbering_properties);
        let list_id = numbering_properties
            .find_child_or_null("w:numId")
            .attribute("w:val")
            .map(str::to_string);

        let children = self.read_all(&element.children);
        ReadResult::map_results(style, children, |style, children| {
            let style = style.into_iter().next().unwrap_or_default();
            Node::Paragraph(Paragraph {
                children,
                style_id: style.style_id,
                style_name: style.style_name,
                numbering,
                list_id,
                alignment,
                indent,
            })
        })
        // Images promoted out of runs (w:pict) surface here, after the
        // paragraph itself.
        .append_extra()
    }

    fn read_paragraph_style(&self, properties: &XmlElement) -> ReadResult<ResolvedStyle> {
        read_style_reference(properties, "w:pStyle", "Paragraph", |style_id| {
            self.styles.find_paragraph_style_by_id(style_id)
        })
    }

    fn read_numbering_properties(
        &self,
        paragraph_style_id: Option<&str>,
        element: &XmlElement,
    ) -> Option<NumberingLevel> {
        let num_id = element.find_child_or_null("w:numId").attribute("w:val");
        let level = element.find_child_or_null("w:ilvl").attribute("w:val");

        // numId 0 explicitly opts the paragraph out of numbering.
        if num_id == Some("0") {
            return None;
        }

        if let Some(style_id) = paragraph_style_id {
            if let Some(level) = self.numbering.find_level_by_paragraph_style_id(style_id) {
                return Some(level);
            }
        }

        match (num_id, level) {
            (Some(num_id), Some(level)) => self.numbering.find_level(num_id, level),
            _ => None,
        }
    }

    // ── Complex fields ───────────────────────────────────────────────────────

    fn read_fld_char(&mut self, element: &XmlElement) -> ReadResult {
        match element.attribute("w:fldCharType") {
            Some("begin") => {
                self.complex_field_stack.push(ComplexField::Unknown);
                self.current_instr_text.clear();
            }
            Some("end") => {
                // An unmatched end is tolerated as a no-op.
                self.complex_field_stack.pop();
            }
            Some("separate") => {
                let complex_field = match parse_hyperlink_field_code(&self.current_instr_text) {
                    Some(kwargs) => ComplexField::Hyperlink(kwargs),
                    None => ComplexField::Unknown,
                };
                self.complex_field_stack.pop();
                self.complex_field_stack.push(complex_field);
            }
            _ => {}
        }
        ReadResult::empty()
    }

    fn read_instr_text(&mut self, element: &XmlElement) -> ReadResult {
        self.current_instr_text.push_str(&element.inner_text());
        ReadResult::empty()
    }

    /// The innermost hyperlink field currently open, if any. Runs read
    /// while this is `Some` are wrapped in a hyperlink node.
    fn current_hyperlink_kwargs(&self) -> Option<&HyperlinkKwargs> {
        self.complex_field_stack
            .iter()
            .rev()
            .find_map(|field| match field {
                ComplexField::Hyperlink(kwargs) => Some(kwargs),
                ComplexField::Unknown => None,
            })
    }

    // ── Hyperlink elements ───────────────────────────────────────────────────

    fn read_hyperlink(&mut self, element: &XmlElement) -> ReadResult {
        let relationship_id = element.attribute("r:id").map(str::to_string);
        let anchor = element.attribute("w:anchor").map(str::to_string);
        let target_frame = element
            .attribute("w:tgtFrame")
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let children = self.read_all(&element.children);

        if let Some(relationship_id) = relationship_id {
            match self
                .relationships
                .find_target_by_relationship_id(&relationship_id)
            {
                Some(target) => {
                    let href = match &anchor {
                        Some(anchor) => uris::replace_fragment(target, anchor),
                        None => target.to_string(),
                    };
                    children.map(|children| {
                        Node::Hyperlink(Hyperlink {
                            children,
                            href: Some(href),
                            anchor: None,
                            target_frame,
                        })
                    })
                }
                None => {
                    let mut result = children;
                    result.messages.insert(
                        0,
                        warning(format!(
                            "Hyperlink relationship with ID {relationship_id} was referenced but not defined"
                        )),
                    );
                    result
                }
            }
        } else if let Some(anchor) = anchor {
            children.map(|children| {
                Node::Hyperlink(Hyperlink {
                    children,
                    href: None,
                    anchor: Some(anchor),
                    target_frame,
                })
            })
        } else {
            children
        }
    }

    // ── Tables ───────────────────────────────────────────────────────────────

    fn read_table(&mut self, element: &XmlElement) -> ReadResult {
        let properties = element.find_child_or_null("w:tblPr");
        let style = read_style_reference(properties, "w:tblStyle", "Table", |style_id| {
            self.styles.find_table_style_by_id(style_id)
        });
        let children = self
            .read_all(&element.children)
            .flat_map(calculate_row_spans);
        ReadResult::map_results(style, children, |style, children| {
            let style = style.into_iter().next().unwrap_or_default();
            Node::Table(Table {
                children,
                style_id: style.style_id,
                style_name: style.style_name,
            })
        })
    }

    fn read_table_row(&mut self, element: &XmlElement) -> ReadResult {
        let properties = element.find_child_or_null("w:trPr");
        // The marker element alone makes a header row, even when empty.
        let is_header = properties.find_child("w:tblHeader").is_some();
        self.read_all(&element.children)
            .map(|children| Node::TableRow(TableRow { children, is_header }))
    }

    fn read_table_cell(&mut self, element: &XmlElement) -> ReadResult {
        let properties = element.find_child_or_null("w:tcPr");
        let colspan = properties
            .find_child_or_null("w:gridSpan")
            .attribute("w:val")
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|span| *span >= 1)
            .unwrap_or(1);
        let vmerge = read_vmerge(properties);
        self.read_all(&element.children).map(|children| {
            Node::TableCell(TableCell {
                children,
                colspan,
                rowspan: 1,
                vmerge,
            })
        })
    }

    // ── Images ───────────────────────────────────────────────────────────────

    fn read_inline_image(&mut self, element: &XmlElement) -> ReadResult {
        let properties = element.find_child_or_null("wp:docPr");
        let alt_text = match properties.attribute("descr") {
            Some(descr) if !descr.trim().is_empty() => Some(descr.to_string()),
            _ => properties.attribute("title").map(str::to_string),
        };
        let extent = element.find_child_or_null("wp:extent");
        let size = match (
            emu_attribute_to_pixels(extent, "cx"),
            emu_attribute_to_pixels(extent, "cy"),
        ) {
            (Some(width), Some(height)) => Some(Size {
                width: width.to_string(),
                height: height.to_string(),
            }),
            _ => None,
        };

        let pic = element
            .find_child("a:graphic")
            .and_then(|graphic| graphic.find_child("a:graphicData"))
            .and_then(|graphic_data| graphic_data.find_child("pic:pic"));
        let blips = pic
            .and_then(|pic| pic.find_child("pic:blipFill"))
            .map(|blip_fill| blip_fill.find_children("a:blip"))
            .unwrap_or_default();
        let has_border = pic.is_some_and(|pic| {
            pic.find_child_or_null("pic:spPr")
                .children
                .iter()
                .any(|child| matches!(child, XmlNode::Element(element) if element.name == "a:ln"))
        });

        let results: Vec<ReadResult> = blips
            .into_iter()
            .map(|blip| self.read_blip(blip, &alt_text, &size, has_border))
            .collect();
        ReadResult::concat(results)
    }

    fn read_blip(
        &self,
        element: &XmlElement,
        alt_text: &Option<String>,
        size: &Option<Size>,
        has_border: bool,
    ) -> ReadResult {
        let image = self.find_blip_image(element);
        self.read_image(image, alt_text.clone(), size.clone(), has_border)
    }

    fn find_blip_image(&self, element: &XmlElement) -> Option<(String, ImageSource)> {
        if let Some(relationship_id) = element.attribute("r:embed") {
            self.find_embedded_image(relationship_id)
        } else if let Some(relationship_id) = element.attribute("r:link") {
            self.find_linked_image(relationship_id)
        } else {
            None
        }
    }

    fn find_embedded_image(&self, relationship_id: &str) -> Option<(String, ImageSource)> {
        let target = self
            .relationships
            .find_target_by_relationship_id(relationship_id)?;
        let entry_name = uris::uri_to_zip_entry_name("word", target);
        let package = self.package.clone()?;
        Some((
            entry_name.clone(),
            ImageSource::Embedded {
                package,
                entry_name,
            },
        ))
    }

    fn find_linked_image(&self, relationship_id: &str) -> Option<(String, ImageSource)> {
        let uri = self
            .relationships
            .find_target_by_relationship_id(relationship_id)?
            .to_string();
        let files = self.files.clone()?;
        Some((uri.clone(), ImageSource::Linked { files, uri }))
    }

    fn read_image(
        &self,
        image: Option<(String, ImageSource)>,
        alt_text: Option<String>,
        size: Option<Size>,
        has_border: bool,
    ) -> ReadResult {
        let Some((path, source)) = image else {
            return ReadResult::empty_with_message(warning(
                "Could not find image file for a:blip element",
            ));
        };
        let content_type = self
            .content_types
            .find_content_type(&path)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let mut attributes = HashMap::new();
        if has_border {
            attributes.insert("class".to_string(), "fr-bordered".to_string());
        }
        let messages = if BROWSER_FRIENDLY_CONTENT_TYPES.contains(&content_type.as_str()) {
            Vec::new()
        } else {
            vec![warning(format!(
                "Image of type {content_type} is unlikely to display in web browsers"
            ))]
        };
        ReadResult::with_messages(
            vec![Node::Image(Image {
                alt_text,
                content_type,
                size,
                attributes,
                source,
            })],
            messages,
        )
    }

    fn read_shape(&mut self, element: &XmlElement) -> ReadResult {
        // A shape whose single child is imagedata *is* an image; anything
        // more structured reads as a passthrough container.
        if element.children.len() == 1 {
            if let Some(imagedata) = element.find_child("v:imagedata") {
                let size = read_shape_size(element);
                return self.read_imagedata(imagedata, size);
            }
        }
        self.read_all(&element.children)
    }

    fn read_imagedata(&self, element: &XmlElement, size: Option<Size>) -> ReadResult {
        let Some(relationship_id) = element.attribute("r:id") else {
            return ReadResult::empty_with_message(warning(
                "A v:imagedata element without a relationship ID was ignored",
            ));
        };
        let alt_text = element.attribute("o:title").map(str::to_string);
        let attributes = element.attributes.clone();
        match self.find_embedded_image(relationship_id) {
            Some((_, source)) => ReadResult::success(Node::Image(Image {
                alt_text,
                // VML imagedata declares no content type of its own.
                content_type: "image/png".to_string(),
                size,
                attributes,
                source,
            })),
            None => ReadResult::empty_with_message(warning(
                "Could not find image file for a:blip element",
            )),
        }
    }

    fn read_pict(&mut self, element: &XmlElement) -> ReadResult {
        // Pictures inside w:pict would vanish with their container, which
        // yields no node; promote them so the paragraph reattaches them.
        self.read_all(&element.children).to_extra()
    }

    // ── Structured content ───────────────────────────────────────────────────

    fn read_alternate_content(&mut self, element: &XmlElement) -> ReadResult {
        match element.find_child("mc:Fallback") {
            Some(fallback) => self.read_all(&fallback.children),
            None => ReadResult::empty(),
        }
    }

    fn read_sdt(&mut self, element: &XmlElement) -> ReadResult {
        self.read_all(&element.find_child_or_null("w:sdtContent").children)
    }
}

// ── Stateless handlers ───────────────────────────────────────────────────────

fn read_text(element: &XmlElement) -> ReadResult {
    text_node(&element.inner_text())
}

fn text_node(value: &str) -> ReadResult {
    ReadResult::success(Node::Text(Text {
        value: value.to_string(),
    }))
}

/// OOXML toggle convention: present means true unless the value opts out.
fn read_boolean_element(element: Option<&XmlElement>) -> bool {
    element.is_some_and(|element| !matches!(element.attribute("w:val"), Some("false" | "0")))
}

/// Underline adds `"none"` to the opt-out values.
fn read_underline_element(element: Option<&XmlElement>) -> bool {
    element.is_some_and(|element| {
        !matches!(element.attribute("w:val"), Some("false" | "0" | "none"))
    })
}

fn read_symbol(element: &XmlElement) -> ReadResult {
    // See 17.3.3.30 sym (Symbol Character) of ECMA-376 4th edition Part 1.
    let font = element.attribute("w:font");
    let char_code = element.attribute("w:char");
    let resolved = match (font, char_code) {
        (Some(font), Some(char_code)) => lookup_dingbat(font, char_code),
        _ => None,
    };
    match resolved {
        Some(character) => text_node(&character.to_string()),
        None => ReadResult::empty_with_message(warning(format!(
            "A w:sym element with an unsupported character was ignored: char {} in font {}",
            char_code.unwrap_or("(none)"),
            font.unwrap_or("(none)"),
        ))),
    }
}

fn lookup_dingbat(font: &str, char_code: &str) -> Option<char> {
    if let Ok(code_point) = u32::from_str_radix(char_code, 16) {
        if let Some(character) = dingbats::find(font, code_point) {
            return Some(character);
        }
    }
    // Word offsets symbol codepoints into the F0xx private-use range;
    // strip the prefix and retry.
    if char_code.len() >= 4 && char_code.starts_with("F0") {
        if let Ok(code_point) = u32::from_str_radix(&char_code[2..], 16) {
            return dingbats::find(font, code_point);
        }
    }
    None
}

fn read_break(element: &XmlElement) -> ReadResult {
    match element.attribute("w:type") {
        None | Some("" | "textWrapping") => ReadResult::success(Node::Break(Break::Line)),
        Some("page") => ReadResult::success(Node::Break(Break::Page)),
        Some("column") => ReadResult::success(Node::Break(Break::Column)),
        Some(break_type) => ReadResult::empty_with_message(warning(format!(
            "Unsupported break type: {break_type}"
        ))),
    }
}

fn read_bookmark_start(element: &XmlElement) -> ReadResult {
    match element.attribute("w:name") {
        // _GoBack is the editor's own cursor bookmark, not content.
        Some("_GoBack") | None => ReadResult::empty(),
        Some(name) => ReadResult::success(Node::Bookmark(Bookmark {
            name: name.to_string(),
        })),
    }
}

fn read_note_reference(note_type: NoteType, element: &XmlElement) -> ReadResult {
    match element.attribute("w:id") {
        Some(note_id) => ReadResult::success(Node::NoteReference(NoteReference {
            note_type,
            note_id: note_id.to_string(),
        })),
        None => ReadResult::empty(),
    }
}

fn read_comment_reference(element: &XmlElement) -> ReadResult {
    match element.attribute("w:id") {
        Some(comment_id) => ReadResult::success(Node::CommentReference(CommentReference {
            comment_id: comment_id.to_string(),
        })),
        None => ReadResult::empty(),
    }
}

fn read_style_reference<'s>(
    properties: &XmlElement,
    style_tag: &str,
    kind: &str,
    lookup: impl FnOnce(&str) -> Option<&'s Style>,
) -> ReadResult<ResolvedStyle> {
    let Some(style_id) = properties.find_child_or_null(style_tag).attribute("w:val") else {
        return ReadResult::success(ResolvedStyle::default());
    };
    match lookup(style_id) {
        Some(style) => ReadResult::success(ResolvedStyle {
            style_id: Some(style_id.to_string()),
            style_name: style.name.clone(),
        }),
        None => ReadResult::with_messages(
            vec![ResolvedStyle {
                style_id: Some(style_id.to_string()),
                style_name: None,
            }],
            vec![warning(format!(
                "{kind} style with ID {style_id} was referenced but not defined in the document"
            ))],
        ),
    }
}

fn read_paragraph_indent(element: &XmlElement) -> ParagraphIndent {
    ParagraphIndent {
        start: element
            .attribute("w:start")
            .or_else(|| element.attribute("w:left"))
            .map(str::to_string),
        end: element
            .attribute("w:end")
            .or_else(|| element.attribute("w:right"))
            .map(str::to_string),
        first_line: element.attribute("w:firstLine").map(str::to_string),
        hanging: element.attribute("w:hanging").map(str::to_string),
    }
}

/// Pulls `width` and `height` out of a VML shape's CSS-like `style`
/// attribute. Both must be present for a size to be reported.
fn read_shape_size(element: &XmlElement) -> Option<Size> {
    let style = element.attribute("style")?;
    let width = extract_size_from_style(style, "width")?;
    let height = extract_size_from_style(style, "height")?;
    Some(Size { width, height })
}

fn extract_size_from_style(style: &str, property: &str) -> Option<String> {
    let prefix = format!("{property}:");
    style
        .split(';')
        .find_map(|declaration| declaration.strip_prefix(&prefix).map(str::to_string))
}

fn read_vmerge(properties: &XmlElement) -> bool {
    match properties.find_child("w:vMerge") {
        None => false,
        // No value (or an empty one) means the same as "continue";
        // "restart" begins a new merge and is not a continuation.
        Some(element) => matches!(element.attribute("w:val"), None | Some("" | "continue")),
    }
}

// ── Row spans ────────────────────────────────────────────────────────────────

/// Rewrites vertical-merge continuations into explicit row-spans.
///
/// Walks rows top to bottom keeping, per column index, the position of
/// the anchor cell currently covering that column. A continuation cell
/// bumps its anchor's rowspan and is dropped; anything else (including a
/// continuation with no anchor above it) becomes the new anchor. Column
/// indexing advances by each cell's colspan so merges stay aligned
/// across rows with horizontal merges.
///
/// Rows containing non-row or non-cell children make merge bookkeeping
/// unsound, so the computation is skipped with a warning.
fn calculate_row_spans(rows: Vec<Node>) -> ReadResult {
    let has_non_row = rows.iter().any(|child| !matches!(child, Node::TableRow(_)));
    if has_non_row {
        return ReadResult::with_messages(
            rows,
            vec![warning(
                "unexpected non-row element in table, cell merging may be incorrect",
            )],
        );
    }
    let has_non_cell = rows.iter().any(|row| match row {
        Node::TableRow(row) => row
            .children
            .iter()
            .any(|cell| !matches!(cell, Node::TableCell(_))),
        _ => false,
    });
    if has_non_cell {
        return ReadResult::with_messages(
            rows,
            vec![warning(
                "unexpected non-cell element in table row, cell merging may be incorrect",
            )],
        );
    }

    let mut rows: Vec<TableRow> = rows
        .into_iter()
        .map(|child| match child {
            Node::TableRow(row) => row,
            _ => unreachable!("non-rows rejected above"),
        })
        .collect();

    // column index → (row, cell) position of the covering anchor.
    let mut columns: HashMap<usize, (usize, usize)> = HashMap::new();
    for row_index in 0..rows.len() {
        let mut column = 0;
        for cell_index in 0..rows[row_index].children.len() {
            let (vmerge, colspan) = match &rows[row_index].children[cell_index] {
                Node::TableCell(cell) => (cell.vmerge, cell.colspan),
                _ => unreachable!("non-cells rejected above"),
            };
            match columns.get(&column).copied() {
                Some((anchor_row, anchor_cell)) if vmerge => {
                    if let Node::TableCell(anchor) =
                        &mut rows[anchor_row].children[anchor_cell]
                    {
                        anchor.rowspan += 1;
                    }
                    // The continuation keeps vmerge = true and is
                    // filtered out below.
                }
                _ => {
                    columns.insert(column, (row_index, cell_index));
                    if let Node::TableCell(cell) = &mut rows[row_index].children[cell_index] {
                        cell.vmerge = false;
                    }
                }
            }
            column += colspan;
        }
    }

    for row in &mut rows {
        row.children
            .retain(|cell| matches!(cell, Node::TableCell(cell) if !cell.vmerge));
    }

    ReadResult::success_many(rows.into_iter().map(Node::TableRow).collect())
}

// ── Measurement ──────────────────────────────────────────────────────────────

pub(crate) fn emu_to_pixel(emu: f64) -> i64 {
    (emu / EMU_PER_PIXEL).round() as i64
}

fn emu_attribute_to_pixels(element: &XmlElement, name: &str) -> Option<i64> {
    element
        .attribute(name)?
        .parse::<f64>()
        .ok()
        .map(emu_to_pixel)
}

#[cfg(test)]
#[path = "body_tests.rs"]
mod tests;
