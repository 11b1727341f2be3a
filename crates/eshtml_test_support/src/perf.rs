//! Synthetic EsHTML documents for benchmarks and scaling tests.

/// One block: `<sección clase="caja"><e2 idioma="es">Hola</e2><entrada tipo="texto"><p>texto</p></sección>`.
pub const BLOCK: &str =
    "<sección clase=\"caja\"><e2 idioma=\"es\">Hola</e2><entrada tipo=\"texto\"><p>texto</p></sección>";

/// Tags per [`BLOCK`]: sección, e2, /e2, entrada, p, /p, /sección.
pub const TAGS_PER_BLOCK: usize = 7;

pub fn make_blocks(blocks: usize) -> String {
    let mut out = String::with_capacity(BLOCK.len() * blocks + 32);
    out.push_str("<div>");
    for _ in 0..blocks {
        out.push_str(BLOCK);
    }
    out.push_str("</div>");
    out
}

/// A `guion` element whose content is full of near-miss closing tags.
pub fn make_raw_text_adversarial(bytes: usize) -> String {
    let mut body = String::with_capacity(bytes + 32);
    body.push_str("<guion>");
    while body.len() < bytes {
        body.push_str("</guio<");
        body.push_str("</guionx>");
    }
    body.push_str("</guion>");
    body
}

/// `depth` nested `sección` elements around a text node.
pub fn make_nested(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 21 + 16);
    for _ in 0..depth {
        out.push_str("<sección>");
    }
    out.push_str("Contenido");
    for _ in 0..depth {
        out.push_str("</sección>");
    }
    out
}
