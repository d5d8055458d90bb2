//! Exporting chapters to MyST.

use std::fs;

use guide_model::{
    Catalog, Chapter, ChapterId, Exercise, ExercisesSection, Section, TheorySection,
};
use guide_report::{chapter_document, export_directory, index_document};

fn kinematics() -> Chapter {
    Chapter {
        id: ChapterId::new(2),
        title: "Capítulo 2: Movimiento en Una Dimensión".to_string(),
        part: "Mecánica".to_string(),
        generation_date: "2025-10-01".to_string(),
        sections: vec![
            Section::Theory(TheorySection {
                title: "Conceptos".to_string(),
                body: "La velocidad media:\\n$$v = \\Delta x / \\Delta t$$".to_string(),
            }),
            Section::Exercises(ExercisesSection {
                title: "Ejercicios".to_string(),
                items: vec![Exercise {
                    statement: "Un auto recorre 100 m.\n¿Velocidad?".to_string(),
                    solution: "$$v = 100/10$$\nv = 10 m/s".to_string(),
                }],
            }),
        ],
    }
}

#[test]
fn chapter_document_layout() {
    let document = chapter_document(&kinematics(), &Catalog::serway_volume_one());

    insta::assert_snapshot!(document.trim_end(), @r"
    (capitulo_2)=
    # Capítulo 2: Movimiento en Una Dimensión

    *Parte: Mecánica*
    *Fecha: 2025-10-01*

    ## Conceptos

    La velocidad media:
    $$v = \Delta x / \Delta t$$

    ## Ejercicios

    ### Problema 1: Un auto recorre 100 m.

    Un auto recorre 100 m.
    ¿Velocidad?

    .. dropdown:: Mostrar Solución

       $$v = 100/10$$
       v = 10 m/s
    ");
}

#[test]
fn missing_header_fields_use_defaults() {
    let mut chapter = kinematics();
    chapter.part.clear();
    chapter.generation_date.clear();

    let document = chapter_document(&chapter, &Catalog::serway_volume_one());

    assert!(document.contains("*Parte: General*\n*Fecha: Desconocida*\n"));
}

#[test]
fn index_lists_entries_in_order() {
    let index = index_document(&["capitulo_01", "capitulo_14"]);

    insta::assert_snapshot!(index.trim_end(), @r"
    # Guía Completa de Física y Matemáticas

    Esta es una guía completa de conceptos y ejercicios resueltos de Física.

    .. toctree::
       :maxdepth: 2
       :caption: Capítulos

       capitulo_01
       capitulo_14
    ");
}

#[test]
fn sections_of_unknown_kind_are_left_out() {
    let mut chapter = kinematics();
    chapter.sections.insert(1, Section::Unknown);
    let document = chapter_document(&chapter, &Catalog::serway_volume_one());

    assert_eq!(document, chapter_document(&kinematics(), &Catalog::serway_volume_one()));
    assert!(!document.contains("## \n"));
}

#[test]
fn chapter_14_export_carries_the_diagram_prompt() {
    let catalog = Catalog::serway_volume_one();
    let chapter = Chapter {
        id: ChapterId::new(14),
        title: "Capítulo 14: Movimiento Oscilatorio".to_string(),
        part: "Mecánica".to_string(),
        generation_date: "2025-10-01".to_string(),
        sections: vec![Section::Theory(TheorySection {
            title: "MAS".to_string(),
            body: "$$x = A\\cos(\\omega t)$$".to_string(),
        })],
    };

    let document = chapter_document(&chapter, &catalog);

    let prompt = &catalog.diagram(ChapterId::new(14)).unwrap().prompt;
    assert!(document.contains(&format!("Prompt para generación de IA: {prompt}")));
    assert!(document.contains("Diagrama Faltante"));
}

#[test]
fn export_directory_skips_broken_chapters() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("docs");
    fs::write(input.path().join("capitulo_02.json"), chapter_json()).unwrap();
    fs::write(input.path().join("capitulo_03.json"), "{\"titulo\": \"a\tb\"}").unwrap();
    fs::write(input.path().join("notas.json"), "{}").unwrap();

    let summary =
        export_directory(input.path(), &out_dir, &Catalog::serway_volume_one(), "myst").unwrap();

    assert_eq!(summary.written, vec![out_dir.join("capitulo_02.myst")]);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.skipped[0].path.ends_with("capitulo_03.json"));
    assert!(summary.has_failures());
    assert_eq!(summary.index, out_dir.join("index.myst"));

    let index = fs::read_to_string(&summary.index).unwrap();
    assert!(index.ends_with("   capitulo_02\n"));
    let chapter = fs::read_to_string(out_dir.join("capitulo_02.myst")).unwrap();
    assert!(chapter.starts_with("(capitulo_2)=\n# Capítulo 2: Movimiento en Una Dimensión\n"));
}

fn chapter_json() -> String {
    r#"{
  "capitulo_id": 2,
  "titulo": "Capítulo 2: Movimiento en Una Dimensión",
  "parte": "Mecánica",
  "fecha_generacion": "2025-10-01",
  "secciones": [
    { "tipo": "teoria", "titulo": "Conceptos", "contenido_markdown": "$$v = \\Delta x / \\Delta t$$" }
  ]
}"#
    .to_string()
}
