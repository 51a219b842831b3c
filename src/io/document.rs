//! Tiled TMX document access
//!
//! Only three things are read from a document: the `width` and `height`
//! attributes of `<map>` and the CSV text of the first `<layer>`'s
//! `<data>`. Writing re-emits the original document event by event and
//! swaps in new cell text, so everything else (tilesets, properties, other
//! layers) survives untouched.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::configuration::CSV_ENCODING;
use crate::io::error::{Result, document_error, file_system_error};

type ScanResult<T> = std::result::Result<T, String>;

/// Position of an element relative to the cell data being mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Landmark {
    Map,
    Layer,
    CellData,
    Other,
}

/// Tracks the open element path while streaming a document
#[derive(Default)]
struct LayerCursor {
    stack: Vec<Vec<u8>>,
    layers: usize,
}

impl LayerCursor {
    fn open(&mut self, name: &[u8]) -> Landmark {
        self.stack.push(name.to_vec());
        let landmark = self.landmark();
        if landmark == Landmark::Layer {
            self.layers += 1;
        }
        landmark
    }

    fn close(&mut self) -> Landmark {
        let landmark = self.landmark();
        self.stack.pop();
        landmark
    }

    fn landmark(&self) -> Landmark {
        match self.stack.as_slice() {
            [map] if map == b"map" => Landmark::Map,
            [map, layer] if map == b"map" && layer == b"layer" => Landmark::Layer,
            // Only the first layer carries the maze
            [map, layer, data]
                if map == b"map" && layer == b"layer" && data == b"data" && self.layers == 1 =>
            {
                Landmark::CellData
            }
            _ => Landmark::Other,
        }
    }
}

/// A loaded tile-map document
#[derive(Debug, Clone)]
pub struct TmxDocument {
    path: PathBuf,
    source: String,
    width: usize,
    height: usize,
    cell_text: String,
}

impl TmxDocument {
    /// Read and parse the document at `path`
    ///
    /// # Errors
    ///
    /// Returns a file system error if the file cannot be read, or a
    /// document error if its structure is not supported
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| file_system_error(path, "read", e))?;
        Self::parse(path, source)
    }

    /// Parse document text that was obtained from `path`
    ///
    /// # Errors
    ///
    /// Returns a document error if the XML is malformed, `<map>` lacks
    /// positive `width`/`height`, the map is infinite, or the first layer
    /// has no CSV `<data>`
    pub fn parse(path: &Path, source: String) -> Result<Self> {
        let (width, height, cell_text) =
            scan(&source).map_err(|reason| document_error(path, &reason))?;
        Ok(Self {
            path: path.to_path_buf(),
            source,
            width,
            height,
            cell_text,
        })
    }

    /// Path the document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared map width in tiles
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Declared map height in tiles
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Raw cell text of the first layer
    pub fn cell_text(&self) -> &str {
        &self.cell_text
    }

    /// Document text with the first layer's cell text replaced
    ///
    /// # Errors
    ///
    /// Returns a document error if re-emitting the XML fails
    pub fn render(&self, cell_text: &str) -> Result<String> {
        replace_cell_text(&self.source, cell_text)
            .map_err(|reason| document_error(&self.path, &reason))
    }

    /// Write the document with replacement cell text to `target`
    ///
    /// Creates the parent directory of `target` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a document error if rendering fails, or a file system
    /// error if the directory or file cannot be written
    pub fn write(&self, target: &Path, cell_text: &str) -> Result<()> {
        let rendered = self.render(cell_text)?;
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }
        fs::write(target, rendered).map_err(|e| file_system_error(target, "write", e))
    }
}

fn scan(source: &str) -> ScanResult<(usize, usize, String)> {
    let mut reader = Reader::from_str(source);
    let mut cursor = LayerCursor::default();
    let mut dimensions = None;
    let mut cell_text: Option<String> = None;
    let mut capturing = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(element) => match cursor.open(element.name().as_ref()) {
                Landmark::Map => dimensions = Some(read_dimensions(&element)?),
                Landmark::CellData => {
                    check_encoding(&element)?;
                    cell_text = Some(String::new());
                    capturing = true;
                }
                Landmark::Layer | Landmark::Other => {}
            },
            Event::Empty(element) => {
                match cursor.open(element.name().as_ref()) {
                    Landmark::Map => dimensions = Some(read_dimensions(&element)?),
                    Landmark::CellData => {
                        check_encoding(&element)?;
                        cell_text = Some(String::new());
                    }
                    Landmark::Layer | Landmark::Other => {}
                }
                cursor.close();
            }
            Event::Text(text) if capturing => {
                let text = text.unescape().map_err(|e| e.to_string())?;
                if let Some(buffer) = cell_text.as_mut() {
                    buffer.push_str(&text);
                }
            }
            Event::CData(data) if capturing => {
                let text = std::str::from_utf8(&data).map_err(|e| e.to_string())?;
                if let Some(buffer) = cell_text.as_mut() {
                    buffer.push_str(text);
                }
            }
            Event::End(_) => {
                if cursor.close() == Landmark::CellData {
                    capturing = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let (width, height) = dimensions.ok_or("missing <map> element")?;
    if cursor.layers == 0 {
        return Err("map has no <layer>".to_string());
    }
    let cell_text = cell_text.ok_or("first <layer> has no <data>")?;
    Ok((width, height, cell_text))
}

fn replace_cell_text(source: &str, cell_text: &str) -> ScanResult<String> {
    enum Action {
        Copy,
        Skip,
        OpenAndFill,
        ExpandEmpty,
    }

    let mut reader = Reader::from_str(source);
    let mut writer = Writer::new(Vec::with_capacity(source.len()));
    let mut cursor = LayerCursor::default();
    let mut replacing = false;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        let action = match &event {
            Event::Eof => break,
            Event::Start(element) => {
                if cursor.open(element.name().as_ref()) == Landmark::CellData {
                    replacing = true;
                    Action::OpenAndFill
                } else {
                    Action::Copy
                }
            }
            Event::Empty(element) => {
                let landmark = cursor.open(element.name().as_ref());
                cursor.close();
                if landmark == Landmark::CellData {
                    Action::ExpandEmpty
                } else {
                    Action::Copy
                }
            }
            Event::Text(_) | Event::CData(_) if replacing => Action::Skip,
            Event::End(_) => {
                if cursor.close() == Landmark::CellData {
                    replacing = false;
                }
                Action::Copy
            }
            _ => Action::Copy,
        };

        match action {
            Action::Copy => emit(&mut writer, event)?,
            Action::Skip => {}
            Action::OpenAndFill => {
                emit(&mut writer, event)?;
                emit(&mut writer, Event::Text(BytesText::new(cell_text)))?;
            }
            Action::ExpandEmpty => {
                if let Event::Empty(element) = event {
                    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                    emit(&mut writer, Event::Start(element))?;
                    emit(&mut writer, Event::Text(BytesText::new(cell_text)))?;
                    emit(&mut writer, Event::End(BytesEnd::new(name)))?;
                }
            }
        }
    }

    String::from_utf8(writer.into_inner()).map_err(|e| e.to_string())
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> ScanResult<()> {
    writer.write_event(event).map_err(|e| e.to_string())
}

fn attribute(element: &BytesStart<'_>, name: &str) -> ScanResult<Option<String>> {
    match element.try_get_attribute(name) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map(|value| Some(value.into_owned()))
            .map_err(|e| e.to_string()),
        Ok(None) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

fn read_dimensions(element: &BytesStart<'_>) -> ScanResult<(usize, usize)> {
    if attribute(element, "infinite")?.as_deref() == Some("1") {
        return Err("infinite maps are not supported".to_string());
    }
    Ok((
        read_dimension(element, "width")?,
        read_dimension(element, "height")?,
    ))
}

fn read_dimension(element: &BytesStart<'_>, name: &str) -> ScanResult<usize> {
    let value = attribute(element, name)?.ok_or_else(|| format!("<map> has no {name}"))?;
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(format!("<map> {name} '{value}' is not a positive integer")),
    }
}

fn check_encoding(element: &BytesStart<'_>) -> ScanResult<()> {
    if let Some(compression) = attribute(element, "compression")? {
        return Err(format!("compressed layer data ({compression}) is not supported"));
    }
    match attribute(element, "encoding")? {
        Some(encoding) if encoding != CSV_ENCODING => Err(format!(
            "layer data encoding '{encoding}' is not supported"
        )),
        _ => Ok(()),
    }
}
