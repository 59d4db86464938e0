//! Reading and writing graphs as edge lists.
//!
//! An edge list holds one edge per line, given as two vertex names separated by a comma
//! (`NodeA,NodeB`) or by whitespace. Vertex names are arbitrary strings. Blank lines are
//! skipped, and so are lines starting with the comment prefix if one is configured; every
//! other line must contain exactly two non-empty names, otherwise reading fails with
//! [GraphError::Format].
//!
//! ```rust
//! use graphclassics::graph::*;
//! use graphclassics::io::EdgeListReader;
//!
//! let input = "A,B\nB,C\nC,A\n";
//! let graph = EdgeListReader::new().read(input.as_bytes()).unwrap();
//! assert_eq!(graph.num_vertices(), 3);
//! assert_eq!(graph.num_arcs(), 6); // undirected: both directions are stored
//!
//! let graph = EdgeListReader::new().directed(true).read(input.as_bytes()).unwrap();
//! assert_eq!(graph.num_arcs(), 3);
//! ```
use std::ffi::OsStr;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::editgraph::EditGraph;
use crate::error::{GraphError, Result};
use crate::graph::*;

/// Parses edge lists into an [EditGraph] with `String` vertices.
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    directed: bool,
    separator: Option<char>,
    comment_prefix: String,
}

impl Default for EdgeListReader {
    /// Undirected input, comma or whitespace separated, no comments.
    fn default() -> Self {
        EdgeListReader {
            directed: false,
            separator: None,
            comment_prefix: String::new(),
        }
    }
}

impl EdgeListReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// If not directed (the default), every line `u,v` also adds the arc `v,u`.
    pub fn directed(mut self, directed:bool) -> Self {
        self.directed = directed;
        self
    }

    /// Fixes the token separator. With `None` a line is split at commas if it
    /// contains one and at whitespace otherwise.
    pub fn separator(mut self, separator:Option<char>) -> Self {
        self.separator = separator;
        self
    }

    /// Skips lines starting with `prefix`. Off by default since vertex names may
    /// start with any character; an empty prefix switches comments off again.
    pub fn comment_prefix<S: Into<String>>(mut self, prefix:S) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    pub fn read<R: BufRead>(&self, reader:R) -> Result<EditGraph<String>> {
        let mut G = EditGraph::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| match err.kind() {
                io::ErrorKind::InvalidData => GraphError::Encoding { line: lineno+1 },
                _ => GraphError::Io(err)
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || (!self.comment_prefix.is_empty() && trimmed.starts_with(&self.comment_prefix)) {
                continue
            }

            let tokens = self.split(trimmed);
            if tokens.len() != 2 || tokens.iter().any(|t| t.is_empty()) {
                return Err(GraphError::Format { line: lineno+1, content: line.clone() })
            }

            let u = tokens[0].to_string();
            let v = tokens[1].to_string();
            if self.directed {
                G.add_arc(&u, &v);
            } else {
                G.add_edge(&u, &v);
            }
        }

        tracing::debug!(vertices = G.num_vertices(), arcs = G.num_arcs(), directed = self.directed, "edge list read");
        Ok(G)
    }

    /// Reads an edge list from `path`. Files ending in `.gz` are decompressed on the fly.
    pub fn read_file<P: AsRef<Path>>(&self, path:P) -> Result<EditGraph<String>> {
        let buf = open_reader(path.as_ref())?;
        self.read(buf)
    }

    fn split<'l>(&self, line:&'l str) -> Vec<&'l str> {
        match self.separator {
            Some(sep) => line.split(sep).map(str::trim).collect(),
            None if line.contains(',') => line.split(',').map(str::trim).collect(),
            None => line.split_whitespace().collect()
        }
    }
}

/// Writes graphs as edge lists that [EdgeListReader] reads back.
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    directed: bool,
    separator: char,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        EdgeListWriter { directed: false, separator: ',' }
    }
}

impl EdgeListWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// If not directed (the default), the graph is assumed to be symmetric and each
    /// pair of opposite arcs is written as a single line.
    pub fn directed(mut self, directed:bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn separator(mut self, separator:char) -> Self {
        self.separator = separator;
        self
    }

    /// Writes one line per arc, or per edge if undirected. Fails with [GraphError::Format]
    /// if a vertex name would not read back as a single token, e.g. because it contains
    /// the separator.
    pub fn write<V, G, W>(&self, graph:&G, mut buf:W) -> Result<()>
        where V: VertexId + Display, G: Graph<V>, W: Write
    {
        let mut written:VertexSet<(&V, &V)> = VertexSet::default();
        let mut lineno = 0;
        for (u,v) in graph.arcs() {
            if !self.directed && written.contains(&(v,u)) {
                continue
            }
            lineno += 1;
            let (name_u, name_v) = (u.to_string(), v.to_string());
            let line = format!("{name_u}{}{name_v}", self.separator);
            if !self.is_token(&name_u) || !self.is_token(&name_v) {
                return Err(GraphError::Format { line: lineno, content: line })
            }
            buf.write_all(line.as_bytes())?;
            buf.write_all(b"\n")?;
            if !self.directed {
                written.insert((u,v));
            }
        }
        buf.flush()?;

        Ok(())
    }

    /// Writes the edge list to `path`, gzipped if the file name ends in `.gz`.
    pub fn write_file<V, G, P>(&self, graph:&G, path:P) -> Result<()>
        where V: VertexId + Display, G: Graph<V>, P: AsRef<Path>
    {
        let path = path.as_ref();
        let file = File::create(path)?;
        match path.extension().and_then(OsStr::to_str) {
            Some("gz") => {
                let mut buf = BufWriter::new(GzEncoder::new(file, Compression::default()));
                self.write(graph, &mut buf)?;
                // The gzip trailer is only written by `finish`, dropping the
                // encoder would discard its errors.
                let encoder = buf.into_inner().map_err(|err| err.into_error())?;
                encoder.finish()?;
            }
            _ => {
                let mut buf = BufWriter::new(file);
                self.write(graph, &mut buf)?;
                buf.into_inner().map_err(|err| err.into_error())?;
            }
        }
        Ok(())
    }

    /// Whether `name` is read back by [EdgeListReader] as exactly this token.
    fn is_token(&self, name:&str) -> bool {
        if name.is_empty() || name.trim() != name || name.contains(['\n', '\r']) {
            return false
        }
        if self.separator.is_whitespace() {
            !name.contains(char::is_whitespace) && !name.contains(',')
        } else {
            !name.contains(self.separator)
        }
    }
}

fn open_reader(path:&Path) -> Result<Box<dyn BufRead>> {
    let extension = path.extension().and_then(OsStr::to_str);
    let reader:Box<dyn BufRead> = match extension {
        Some("csv") | Some("txt") => {
            let file = File::open(path)?;
            Box::new(BufReader::new(file))
        }
        Some("gz") => {
            let file = File::open(path)?;
            let gz = GzDecoder::new(file);
            Box::new(BufReader::new(gz))
        }
        _ => {
            return Err(GraphError::UnsupportedFile(format!("{} (supported: .csv, .txt and their .gz variants)", path.display())));
        }
    };
    Ok(reader)
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
