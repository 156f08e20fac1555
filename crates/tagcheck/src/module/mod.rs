//! A Terraform module on disk, exposed to rules through [`Runner`].

pub mod eval;
pub mod source;

use std::fs;
use std::path::Path;

use hcl::eval::{Context, Evaluate};
use hcl_edit::structure::{Block as SpannedBlock, Structure};
use hcl_edit::Span;
use tagcheck_core::{AttributeRef, Error, ResourceBlock, Result, Runner, TagValue};
use tracing::debug;

pub use source::SourceFile;

struct ModuleFile {
    source: SourceFile,
    body: hcl::Body,
    spanned: hcl_edit::structure::Body,
}

pub struct Module {
    files: Vec<ModuleFile>,
    ctx: Context<'static>,
}

impl Module {
    /// Load every `*.tf` file directly inside `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "tf") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut files = Vec::with_capacity(paths.len());
        for path in &paths {
            let name = path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            let text = fs::read_to_string(path)?;
            files.push(Self::parse_file(SourceFile::new(name, text))?);
        }

        debug!(dir = %dir.display(), files = files.len(), "loaded module");
        Ok(Self::from_files(files))
    }

    /// Build a module from in-memory sources, keyed by file name.
    pub fn from_sources<I, N, T>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let files = sources
            .into_iter()
            .map(|(name, text)| Self::parse_file(SourceFile::new(name, text)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_files(files))
    }

    fn from_files(files: Vec<ModuleFile>) -> Self {
        let ctx = eval::module_context(files.iter().map(|f| &f.body));
        Self { files, ctx }
    }

    fn parse_file(source: SourceFile) -> Result<ModuleFile> {
        let parse_error = |message: String| Error::Parse {
            file: source.name.clone(),
            message,
        };
        let body = hcl::parse(&source.text).map_err(|e| parse_error(e.to_string()))?;
        let spanned = hcl_edit::parser::parse_body(&source.text)
            .map_err(|e| parse_error(e.to_string()))?;
        Ok(ModuleFile {
            source,
            body,
            spanned,
        })
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl ModuleFile {
    /// Resource blocks from both parses, paired in declaration order.
    fn resource_blocks(&self) -> impl Iterator<Item = (&hcl::Block, &SpannedBlock)> {
        let parsed = self
            .body
            .blocks()
            .filter(|block| block.identifier() == "resource");
        let spanned = self
            .spanned
            .iter()
            .filter_map(Structure::as_block)
            .filter(|block| block.ident.as_str() == "resource");
        parsed.zip(spanned)
    }

    fn span_error(&self, what: &str) -> Error {
        Error::Parse {
            file: self.source.name.clone(),
            message: format!("no source span for {what}"),
        }
    }
}

impl Runner for Module {
    type Expr = hcl::Expression;

    fn resources(
        &self,
        resource_type: &str,
        attribute: &str,
    ) -> Result<Vec<ResourceBlock<hcl::Expression>>> {
        let mut blocks = Vec::new();

        for file in &self.files {
            for (block, spanned) in file.resource_blocks() {
                let [kind, name] = block.labels() else {
                    continue;
                };
                if kind.as_str() != resource_type {
                    continue;
                }

                let start = spanned
                    .ident
                    .span()
                    .ok_or_else(|| file.span_error("resource block"))?
                    .start;
                let def_range = file.source.range(file.source.header_span(start));

                let expr = block
                    .body()
                    .attributes()
                    .find(|a| a.key() == attribute)
                    .map(|a| a.expr().clone());
                let attr_ref = match expr {
                    Some(expr) => {
                        let span = spanned
                            .body
                            .iter()
                            .filter_map(Structure::as_attribute)
                            .find(|a| a.key.as_str() == attribute)
                            .and_then(|a| a.value.span())
                            .ok_or_else(|| file.span_error(attribute))?;
                        Some(AttributeRef {
                            name: attribute.to_string(),
                            expr,
                            range: file.source.range(span),
                        })
                    }
                    None => None,
                };

                blocks.push(ResourceBlock {
                    resource_type: resource_type.to_string(),
                    name: name.as_str().to_string(),
                    def_range,
                    attribute: attr_ref,
                });
            }
        }

        Ok(blocks)
    }

    fn evaluate(
        &self,
        resource: &ResourceBlock<hcl::Expression>,
        attribute: &AttributeRef<hcl::Expression>,
    ) -> Result<TagValue> {
        let value = attribute
            .expr
            .evaluate(&self.ctx)
            .map_err(|err| Error::Evaluation {
                resource: resource.address(),
                attribute: attribute.name.clone(),
                message: err.to_string(),
            })?;
        Ok(TagValue::from_hcl(&value))
    }
}
