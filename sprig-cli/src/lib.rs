use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use sprig_dom::VNode;
use sprig_renderer::memory::Document;

/// HTML produced from one tree, with the size of that tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub html: String,
    pub node_count: usize,
    pub text_count: usize,
}

/// Parse a JSON tree (strings are text, objects carry `nodeName`,
/// `attributes` and `children`) and render it into a fresh document.
pub fn render_json(src: &str) -> Result<RenderOutput> {
    let vnode: VNode = serde_json::from_str(src).context("input is not a valid node tree")?;
    let mut doc = Document::new();
    let root = sprig_renderer::render(&vnode, &mut doc).context("render failed")?;
    Ok(RenderOutput {
        html: doc.to_html(root),
        node_count: vnode.node_count(),
        text_count: vnode.text_count(),
    })
}

/// Render the tree in `input` (`-` reads stdin) and write the HTML to `out`,
/// or to stdout when no path is given.
pub fn render_cmd(input: &Path, out: Option<&Path>, stats: bool) -> Result<()> {
    render_cmd_with(
        input,
        out,
        stats,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    )
}

/// [`render_cmd`] over explicit standard streams.
pub fn render_cmd_with(
    input: &Path,
    out: Option<&Path>,
    stats: bool,
    mut stdin: impl Read,
    mut stdout: impl Write,
    mut stderr: impl Write,
) -> Result<()> {
    let src = if input == Path::new("-") {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?
    };

    let output = render_json(&src).with_context(|| format!("in {}", input.display()))?;
    log::info!("rendered {} ({} bytes of html)", input.display(), output.html.len());

    match out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            fs::write(path, format!("{}\n", output.html))
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => writeln!(stdout, "{}", output.html).context("failed to write stdout")?,
    }

    if stats {
        writeln!(
            stderr,
            "nodes: {}, text: {}",
            output.node_count, output.text_count
        )
        .context("failed to write stderr")?;
    }
    Ok(())
}
