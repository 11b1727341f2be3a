use eshtml::{Direction, TranspileOptions, Transpiler, ValidationError, ValidationErrorKind};

fn transpiler() -> Transpiler {
    Transpiler::spanish().expect("spanish tables")
}

fn lenient(source: &str) -> String {
    let mut sink: Vec<ValidationError> = Vec::new();
    transpiler()
        .transpile_with_sink(
            source,
            Direction::Forward,
            &TranspileOptions::default(),
            &mut sink,
        )
        .expect("lenient mode never fails")
}

fn assert_cases(cases: &[(&str, &str)]) {
    let transpiler = transpiler();
    for (input, expected) in cases {
        let actual = transpiler
            .transpile(input, &TranspileOptions::default())
            .expect("lenient mode never fails");
        assert_eq!(&actual, expected, "input: {input}");
    }
}

#[test]
fn translates_basic_tags() {
    assert_cases(&[
        ("<título>Test</título>", "<title>Test</title>"),
        ("<sección>Test</sección>", "<section>Test</section>"),
        ("<artículo>Test</artículo>", "<article>Test</article>"),
        ("<formulario>Test</formulario>", "<form>Test</form>"),
        ("<botón>Test</botón>", "<button>Test</button>"),
        ("<pie>Footer</pie>", "<footer>Footer</footer>"),
        ("<encabezado>Header</encabezado>", "<header>Header</header>"),
        (
            "<imagen src='test.jpg' alt='Test'/>",
            "<picture src='test.jpg' alt='Test'/>",
        ),
    ]);
}

#[test]
fn keeps_tags_that_are_already_canonical() {
    assert_cases(&[
        ("<img src='test.jpg'/>", "<img src='test.jpg'/>"),
        (
            "<a href='https://google.com'>Google</a>",
            "<a href='https://google.com'>Google</a>",
        ),
    ]);
}

#[test]
fn translates_headings() {
    assert_cases(&[
        ("<e1>Título Principal</e1>", "<h1>Título Principal</h1>"),
        ("<e2>Subtítulo</e2>", "<h2>Subtítulo</h2>"),
        ("<e3>Sección</e3>", "<h3>Sección</h3>"),
        ("<e4>Tema</e4>", "<h4>Tema</h4>"),
        ("<e5>Subtema</e5>", "<h5>Subtema</h5>"),
        ("<e6>Nota</e6>", "<h6>Nota</h6>"),
    ]);
}

#[test]
fn translates_nested_tags() {
    assert_cases(&[(
        "<sección><artículo><título>Test</título></artículo></sección>",
        "<section><article><title>Test</title></article></section>",
    )]);
}

#[test]
fn leaves_unknown_tags_alone() {
    assert_eq!(
        lenient("<desconocido>Test</desconocido>"),
        "<desconocido>Test</desconocido>"
    );
}

#[test]
fn translates_full_word_attributes() {
    assert_cases(&[
        ("<div clase=\"test\"></div>", "<div class=\"test\"></div>"),
        ("<entrada tipo=\"text\">", "<input type=\"text\">"),
        ("<botón deshabilitado></botón>", "<button disabled></button>"),
        ("<entrada requerido>", "<input required>"),
        (
            "<seleccionar múltiple></seleccionar>",
            "<select multiple></select>",
        ),
        ("<imagen fte=\"image.png\"/>", "<picture src=\"image.png\"/>"),
    ]);
}

#[test]
fn translates_abbreviated_attributes() {
    assert_cases(&[
        (
            "<img fte=\"test.jpg\" ta=\"desc\">",
            "<img src=\"test.jpg\" alt=\"desc\">",
        ),
        ("<ct ec=\"2\"></ct>", "<td colspan=\"2\"></td>"),
        ("<ct ef=\"3\"></ct>", "<td rowspan=\"3\"></td>"),
        ("<a rd=\"stylesheet\"></a>", "<a rel=\"stylesheet\"></a>"),
        ("<eshtml idio=\"es\"></eshtml>", "<html lang=\"es\"></html>"),
    ]);
}

#[test]
fn leaves_unknown_attributes_alone() {
    assert_eq!(
        lenient("<div desconocido=\"valor\"></div>"),
        "<div desconocido=\"valor\"></div>"
    );
}

#[test]
fn nested_form() {
    assert_cases(&[(
        "<formulario método=\"post\"><entrada tipo=\"text\" requerido><botón>Enviar</botón></formulario>",
        "<form method=\"post\"><input type=\"text\" required><button>Enviar</button></form>",
    )]);
}

#[test]
fn table_abbreviations() {
    assert_cases(&[(
        "<tabla><ft><et ec=\"2\">Cabeza</et></ft><ft><ct ef=\"2\">Dato</ct></ft></tabla>",
        "<table><tr><th colspan=\"2\">Cabeza</th></tr><tr><td rowspan=\"2\">Dato</td></tr></table>",
    )]);
}

#[test]
fn mixed_localized_and_canonical_tags() {
    assert_cases(&[(
        "<div><etiqueta>Nueva</etiqueta><p>Texto</p></div>",
        "<div><label>Nueva</label><p>Texto</p></div>",
    )]);
}

#[test]
fn strict_mode_rejects_unknown_tags() {
    let err = transpiler()
        .transpile("<tagInvalido>", &TranspileOptions::strict())
        .expect_err("strict mode must fail");
    assert_eq!(err.errors()[0].kind, ValidationErrorKind::UnknownTag);
    assert!(err.to_string().contains("line 1, column 1"));
}

#[test]
fn lenient_mode_reports_and_keeps_unknown_tags() {
    let mut sink: Vec<ValidationError> = Vec::new();
    let out = transpiler()
        .transpile_with_sink(
            "<tagInvalido>",
            Direction::Forward,
            &TranspileOptions::default(),
            &mut sink,
        )
        .expect("lenient");
    assert_eq!(out, "<tagInvalido>");
    assert_eq!(sink.len(), 1);
}

#[test]
fn strict_mode_rejects_mismatched_tags() {
    let err = transpiler()
        .transpile("<div><p>Test</div>", &TranspileOptions::strict())
        .expect_err("strict mode must fail");
    assert_eq!(err.errors()[0].kind, ValidationErrorKind::MismatchedClose);
}

#[test]
fn lenient_mode_outputs_mismatched_tags() {
    let mut sink: Vec<ValidationError> = Vec::new();
    let out = transpiler()
        .transpile_with_sink(
            "<div><p>Test</div>",
            Direction::Forward,
            &TranspileOptions::default(),
            &mut sink,
        )
        .expect("lenient");
    assert_eq!(out, "<div><p>Test</div>");
    assert!(!sink.is_empty());
}

#[test]
fn empty_input() {
    assert_eq!(lenient(""), "");
}

#[test]
fn self_closing_tags() {
    assert_eq!(lenient("<img fte=\"test.jpg\"/>"), "<img src=\"test.jpg\"/>");
    assert_eq!(lenient("<br/>"), "<br/>");
}

#[test]
fn special_content_is_preserved() {
    for input in [
        "<!-- comentario -->",
        "<!-- <comment> Testing this mock comment tag </comment> -->",
        "<!-- <h1> Testing comment with a real tag inside </h1> -->",
        "<![CDATA[datos]]>",
        "<?xml version=\"1.0\"?>",
    ] {
        assert_eq!(lenient(input), input);
    }
}

#[test]
fn entities_are_untouched() {
    let input = "<p>5 &gt; 3 &amp;&amp; 2 &lt; 4</p>";
    assert_eq!(lenient(input), input);
    assert_eq!(
        lenient("<entrada tipo=\"text\" placeholder=\"Nombre &amp; Apellido\"/>"),
        "<input type=\"text\" placeholder=\"Nombre &amp; Apellido\"/>"
    );
}

#[test]
fn translates_attribute_values() {
    assert_cases(&[
        ("<entrada tipo=\"texto\">", "<input type=\"text\">"),
        ("<entrada tipo=\"archivo\">", "<input type=\"file\">"),
        ("<botón tipo=\"enviar\">", "<button type=\"submit\">"),
        ("<div data-activo=\"verdadero\"></div>", "<div data-activo=\"true\"></div>"),
        ("<div data-activo=\"falso\"></div>", "<div data-activo=\"false\"></div>"),
        ("<div data-mostrar=\"sí\"></div>", "<div data-mostrar=\"yes\"></div>"),
        ("<div data-mostrar=\"no\"></div>", "<div data-mostrar=\"no\"></div>"),
        ("<div align=\"izquierda\"></div>", "<div align=\"left\"></div>"),
        ("<div align=\"derecha\"></div>", "<div align=\"right\"></div>"),
        ("<div align=\"centro\"></div>", "<div align=\"center\"></div>"),
        ("<div align=\"justificado\"></div>", "<div align=\"justify\"></div>"),
        ("<entrada tipo=\"  texto  \">", "<input type=\"text\">"),
        ("<entrada tipo='texto'>", "<input type='text'>"),
        (
            "<entrada valor=\"Escribe texto aquí\">",
            "<input value=\"Escribe texto aquí\">",
        ),
    ]);
}

#[test]
fn newer_tags() {
    assert_cases(&[
        (
            "<citabloque><p>Una cita larga aquí.</p></citabloque>",
            "<blockquote><p>Una cita larga aquí.</p></blockquote>",
        ),
        (
            "<listadatos id=\"opciones\"><opción valor=\"1\"/></listadatos>",
            "<datalist id=\"opciones\"><option value=\"1\"/></datalist>",
        ),
        (
            "<grupocampos><leyenda>Título</leyenda></grupocampos>",
            "<fieldset><legend>Título</legend></fieldset>",
        ),
        (
            "<citabloque clase=\"destacado\" cita=\"Autor\"><p>Texto</p></citabloque>",
            "<blockquote class=\"destacado\" cita=\"Autor\"><p>Texto</p></blockquote>",
        ),
    ]);
}

#[test]
fn large_document() {
    let doc = format!("<div>{}</div>", "<botón>Test</botón>".repeat(1000));
    let out = lenient(&doc);
    assert_eq!(out.matches("<button>Test</button>").count(), 1000);
}

#[test]
fn deeply_nested_structure() {
    let input = format!("{}Contenido{}", "<sección>".repeat(50), "</sección>".repeat(50));
    let expected = format!("{}Contenido{}", "<section>".repeat(50), "</section>".repeat(50));
    assert_eq!(lenient(&input), expected);
    assert!(transpiler().validate_source(&input).is_empty());
}

#[test]
fn instance_reuse() {
    let transpiler = transpiler();
    for _ in 0..100 {
        assert_eq!(
            transpiler
                .transpile("<botón clase=\"test\">Click</botón>", &TranspileOptions::strict())
                .expect("valid"),
            "<button class=\"test\">Click</button>"
        );
    }
}

#[test]
fn case_insensitive_matching_emits_lowercase() {
    assert_cases(&[
        ("<Botón>Click</Botón>", "<button>Click</button>"),
        ("<BOTÓN>Click</BOTÓN>", "<button>Click</button>"),
        ("<entrada tipo=\"Texto\">", "<input type=\"text\">"),
    ]);
}

const COMPLETE_DOCUMENT: &str = "<!DOCTYPE html>
<eshtml idioma=\"es\">
  <cabecera>
    <título>Mi Sitio</título>
  </cabecera>
  <cuerpo>
    <encabezado>
      <e1>Bienvenido</e1>
    </encabezado>
    <principal>
      <artículo>
        <e2>Contenido</e2>
        <p>Texto del artículo.</p>
      </artículo>
    </principal>
    <pie>
      <p>© 2025</p>
    </pie>
  </cuerpo>
</eshtml>";

const COMPLETE_DOCUMENT_HTML: &str = "<!DOCTYPE html>
<html lang=\"es\">
  <head>
    <title>Mi Sitio</title>
  </head>
  <body>
    <header>
      <h1>Bienvenido</h1>
    </header>
    <main>
      <article>
        <h2>Contenido</h2>
        <p>Texto del artículo.</p>
      </article>
    </main>
    <footer>
      <p>© 2025</p>
    </footer>
  </body>
</html>";

#[test]
fn complete_document() {
    let transpiler = transpiler();
    assert!(transpiler.validate_source(COMPLETE_DOCUMENT).is_empty());
    assert_eq!(
        transpiler
            .transpile(COMPLETE_DOCUMENT, &TranspileOptions::strict())
            .expect("valid"),
        COMPLETE_DOCUMENT_HTML
    );
}

#[test]
fn form_with_all_features() {
    let input = "<formulario método=\"post\" acción=\"/enviar\">
  <grupocampos>
    <leyenda>Información Personal</leyenda>
    <etiqueta para=\"nombre\">Nombre:</etiqueta>
    <entrada tipo=\"texto\" nombre=\"nombre\" requerido/>
    <etiqueta para=\"correo\">Email:</etiqueta>
    <entrada tipo=\"text\" nombre=\"correo\"/>
  </grupocampos>
  <botón tipo=\"enviar\">Enviar</botón>
</formulario>";
    let expected = "<form method=\"post\" action=\"/enviar\">
  <fieldset>
    <legend>Información Personal</legend>
    <label for=\"nombre\">Nombre:</label>
    <input type=\"text\" name=\"nombre\" required/>
    <label for=\"correo\">Email:</label>
    <input type=\"text\" name=\"correo\"/>
  </fieldset>
  <button type=\"submit\">Enviar</button>
</form>";
    let transpiler = transpiler();
    assert!(transpiler.validate_source(input).is_empty());
    assert_eq!(
        transpiler
            .transpile(input, &TranspileOptions::strict())
            .expect("valid"),
        expected
    );
}

#[test]
fn localized_script_content_is_raw_text() {
    let input = "<guion>if (a <b && clase > 0) { x = \"texto\"; }</guion>";
    assert!(transpiler().validate_source(input).is_empty());
    assert_eq!(
        lenient(input),
        "<script>if (a <b && clase > 0) { x = \"texto\"; }</script>"
    );
}

#[test]
fn reverse_transpile_restores_primary_spellings() {
    assert_eq!(
        transpiler().reverse_transpile(COMPLETE_DOCUMENT_HTML),
        COMPLETE_DOCUMENT
    );
    assert_eq!(
        transpiler().reverse_transpile("<a target=\"_blank\" width=\"3\">"),
        "<a destino=\"_blank\" ancho=\"3\">"
    );
}

#[test]
fn stray_processing_instruction_opener_does_not_stop_rewriting() {
    assert_eq!(
        lenient("<p>a <? b</p><sección clase=\"x\"></sección>"),
        "<p>a <? b</p><section class=\"x\"></section>"
    );
    assert_eq!(
        lenient("<!-- sin cierre <sección>x</sección>"),
        "<!-- sin cierre <section>x</section>"
    );
}
