//! Paragraph extraction from `.docx` documents.
//!
//! A `.docx` file is a zip archive whose main part, `word/document.xml`,
//! holds the body as WordprocessingML. Only paragraphs directly under
//! `w:body` are read; paragraphs inside tables, content controls and text
//! boxes are skipped.

use std::fs::File;
use std::io::{BufReader, Read};

use camino::Utf8Path;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::DocumentError;
use crate::matcher::SuffixList;

/// Archive entry holding the document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

const WORDML_NAMESPACES: [&[u8]; 2] = [
    b"http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    b"http://purl.oclc.org/ooxml/wordprocessingml/main",
];

/// Read the text of every body paragraph, in document order.
///
/// Runs are concatenated. `w:tab` becomes `\t` and `w:noBreakHyphen`
/// becomes `-`; `w:cr` and line breaks become `\n`. Empty paragraphs are
/// kept as empty strings. With `max_bytes` set, both the file and its
/// decompressed body part must fit within it.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn read_paragraphs(
    path: &Utf8Path,
    max_bytes: Option<usize>,
) -> Result<Vec<String>, DocumentError> {
    let open_error = |source| DocumentError::Open {
        path: path.to_owned(),
        source,
    };
    let archive_error = |source| DocumentError::Archive {
        path: path.to_owned(),
        source,
    };
    let too_large = |size, limit| DocumentError::TooLarge {
        path: path.to_owned(),
        size,
        limit,
    };

    let file = File::open(path).map_err(open_error)?;
    let size = file.metadata().map_err(open_error)?.len();
    if let Some(limit) = max_bytes
        && size > limit as u64
    {
        return Err(too_large(size, limit));
    }

    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(archive_error)?;
    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => {
            return Err(DocumentError::MissingPart {
                path: path.to_owned(),
                part: DOCUMENT_PART,
            });
        }
        Err(source) => return Err(archive_error(source)),
    };
    if let Some(limit) = max_bytes
        && part.size() > limit as u64
    {
        return Err(too_large(part.size(), limit));
    }

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| archive_error(ZipError::Io(e)))?;

    let paragraphs = parse_document(&xml).map_err(|message| DocumentError::Xml {
        path: path.to_owned(),
        message,
    })?;
    tracing::debug!(paragraphs = paragraphs.len(), "document read");
    Ok(paragraphs)
}

/// Read a suffix list: every whitespace-separated token of every paragraph.
pub fn read_suffix_list(
    path: &Utf8Path,
    max_bytes: Option<usize>,
) -> Result<SuffixList, DocumentError> {
    let paragraphs = read_paragraphs(path, max_bytes)?;
    let suffixes = SuffixList::from_paragraphs(&paragraphs);
    tracing::debug!(path = %path, suffixes = suffixes.len(), "suffix list read");
    Ok(suffixes)
}

/// Extract body paragraph texts from a `word/document.xml` string.
///
/// Only paragraphs that are direct children of `w:body` count, and only
/// runs that are direct children of the paragraph or of one of its
/// hyperlinks contribute text. Elements outside WordprocessingML are
/// kept on the stack under an empty name so they never match.
pub(crate) fn parse_document(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = NsReader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    // Stack index of the open body paragraph
    let mut paragraph: Option<(usize, String)> = None;

    loop {
        let (namespace, event) = match reader.read_resolved_event() {
            Ok(resolved) => resolved,
            Err(e) => return Err(e.to_string()),
        };
        let wordml = matches!(
            namespace,
            ResolveResult::Bound(Namespace(ns)) if WORDML_NAMESPACES.contains(&ns)
        );

        match event {
            Event::Start(start) => {
                let name = if wordml {
                    start.local_name().as_ref().to_vec()
                } else {
                    Vec::new()
                };
                let body_child = stack.last().is_some_and(|e| e == b"body");
                if name == b"p" && body_child && paragraph.is_none() {
                    paragraph = Some((stack.len(), String::new()));
                } else if let Some((level, text)) = paragraph.as_mut()
                    && in_run(&stack[*level + 1..])
                {
                    text.push_str(inline_text(&name, &start));
                }
                stack.push(name);
            }
            Event::End(_) => {
                stack.pop();
                if let Some((level, _)) = &paragraph
                    && stack.len() == *level
                    && let Some((_, text)) = paragraph.take()
                {
                    paragraphs.push(text);
                }
            }
            Event::Empty(empty) if wordml => {
                let name = empty.local_name();
                if name.as_ref() == b"p" && stack.last().is_some_and(|e| e == b"body") {
                    paragraphs.push(String::new());
                } else if let Some((level, text)) = paragraph.as_mut()
                    && in_run(&stack[*level + 1..])
                {
                    text.push_str(inline_text(name.as_ref(), &empty));
                }
            }
            Event::Text(content) => {
                if let Some((level, text)) = paragraph.as_mut()
                    && let [run @ .., last] = &stack[*level + 1..]
                    && last == b"t"
                    && in_run(run)
                {
                    text.push_str(&content.unescape().map_err(|e| e.to_string())?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Whether a path below a paragraph ends inside a run of that paragraph,
/// either directly or through a hyperlink.
fn in_run(path: &[Vec<u8>]) -> bool {
    match path {
        [run] => run == b"r",
        [link, run] => link == b"hyperlink" && run == b"r",
        _ => false,
    }
}

/// Text a run-level element stands for. Page and column breaks add nothing.
fn inline_text(name: &[u8], element: &BytesStart<'_>) -> &'static str {
    match name {
        b"tab" | b"ptab" => "\t",
        b"cr" => "\n",
        b"noBreakHyphen" => "-",
        b"br" => {
            let kind = element
                .attributes()
                .flatten()
                .find(|attr| attr.key.local_name().as_ref() == b"type")
                .map(|attr| attr.value.into_owned());
            match kind.as_deref() {
                None | Some(b"textWrapping") => "\n",
                Some(_) => "",
            }
        }
        _ => "",
    }
}
