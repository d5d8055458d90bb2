//! Static book structure compiled into the application.
//!
//! The catalog groups chapter ids into parts for navigation and carries the
//! sidebar titles and diagram prompts. None of it is read from the chapter
//! files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ChapterId, ModelError, Result};

/// A named group of consecutive chapters used for top-level navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Stable identifier used on the command line (e.g. `thermodynamics`).
    pub slug: String,
    /// Display label without decoration.
    pub label: String,
    /// Decorative icon shown in front of the label in the sidebar.
    pub icon: String,
    pub chapters: Vec<ChapterId>,
}

impl Part {
    pub fn new(
        slug: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
        chapters: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
            icon: icon.into(),
            chapters: chapters.into_iter().map(ChapterId::new).collect(),
        }
    }

    pub fn contains(&self, chapter: ChapterId) -> bool {
        self.chapters.contains(&chapter)
    }

    /// First chapter of the part. Catalog validation guarantees it exists.
    pub fn first_chapter(&self) -> Option<ChapterId> {
        self.chapters.first().copied()
    }

    /// Label with the icon prefix, as shown in the part selector.
    pub fn decorated_label(&self) -> String {
        if self.icon.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.icon, self.label)
        }
    }
}

/// Supplementary diagram for a chapter's theory tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    /// Image location; `None` until an image has been provisioned.
    pub url: Option<String>,
    /// Description of the figure, also used as the image-generation prompt.
    pub prompt: String,
}

impl Diagram {
    pub fn placeholder(prompt: impl Into<String>) -> Self {
        Self {
            url: None,
            prompt: prompt.into(),
        }
    }

    pub fn is_provisioned(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    parts: Vec<Part>,
    titles: BTreeMap<ChapterId, String>,
    diagrams: BTreeMap<ChapterId, Diagram>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty parts and chapters listed twice.
    pub fn new(parts: Vec<Part>) -> Result<Self> {
        if parts.is_empty() {
            return Err(ModelError::EmptyCatalog);
        }
        let mut owners: BTreeMap<ChapterId, &str> = BTreeMap::new();
        for (index, part) in parts.iter().enumerate() {
            if part.chapters.is_empty() {
                return Err(ModelError::EmptyPart {
                    slug: part.slug.clone(),
                });
            }
            if parts[..index].iter().any(|other| other.slug == part.slug) {
                return Err(ModelError::DuplicatePart {
                    slug: part.slug.clone(),
                });
            }
            for &chapter in &part.chapters {
                if let Some(first) = owners.insert(chapter, &part.slug) {
                    return Err(ModelError::DuplicateChapter {
                        chapter,
                        first: first.to_string(),
                        second: part.slug.clone(),
                    });
                }
            }
        }
        Ok(Self {
            parts,
            titles: BTreeMap::new(),
            diagrams: BTreeMap::new(),
        })
    }

    #[must_use]
    pub fn with_title(mut self, chapter: u32, title: impl Into<String>) -> Self {
        self.titles.insert(ChapterId::new(chapter), title.into());
        self
    }

    #[must_use]
    pub fn with_diagram(mut self, chapter: u32, diagram: Diagram) -> Self {
        self.diagrams.insert(ChapterId::new(chapter), diagram);
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn first_part(&self) -> &Part {
        &self.parts[0]
    }

    pub fn part_at(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    /// Finds a part by slug (case-insensitive).
    pub fn part_index(&self, slug: &str) -> Option<usize> {
        self.parts
            .iter()
            .position(|part| part.slug.eq_ignore_ascii_case(slug.trim()))
    }

    pub fn part(&self, slug: &str) -> Option<&Part> {
        self.part_index(slug).map(|index| &self.parts[index])
    }

    /// Index of the part that lists `chapter`.
    pub fn part_of(&self, chapter: ChapterId) -> Option<usize> {
        self.parts.iter().position(|part| part.contains(chapter))
    }

    pub fn contains(&self, chapter: ChapterId) -> bool {
        self.part_of(chapter).is_some()
    }

    /// Every chapter id in navigation order.
    pub fn chapter_ids(&self) -> impl Iterator<Item = ChapterId> + '_ {
        self.parts.iter().flat_map(|part| part.chapters.iter().copied())
    }

    /// Sidebar title, falling back to a generic label for unnamed chapters.
    pub fn chapter_title(&self, chapter: ChapterId) -> String {
        self.titles
            .get(&chapter)
            .cloned()
            .unwrap_or_else(|| format!("Capítulo {chapter} (Título no disponible)"))
    }

    pub fn diagram(&self, chapter: ChapterId) -> Option<&Diagram> {
        self.diagrams.get(&chapter)
    }

    /// Serway & Jewett, Volume 1.
    pub fn serway_volume_one() -> Self {
        let parts = vec![
            Part::new("mechanics", "📚", "PARTE 1: Mecánica (Caps. 1-14)", 1..=14),
            Part::new(
                "waves",
                "🌊",
                "PARTE 2: Oscilaciones y Ondas Mecánicas (Caps. 15-18)",
                15..=18,
            ),
            Part::new(
                "thermodynamics",
                "🔥",
                "PARTE 3: Termodinámica (Caps. 19-22)",
                19..=22,
            ),
        ];
        let mut catalog = Self {
            parts,
            titles: BTreeMap::new(),
            diagrams: BTreeMap::new(),
        };
        for (chapter, title) in SERWAY_TITLES {
            catalog = catalog.with_title(*chapter, *title);
        }
        catalog
            .with_diagram(
                5,
                Diagram::placeholder(
                    "Diagrama de cuerpo libre técnico de un bloque sobre un plano inclinado con fuerzas N, W, y f_k rotuladas.",
                ),
            )
            .with_diagram(
                13,
                Diagram::placeholder(
                    "Diagrama técnico de un tubo Venturi mostrando la Ecuación de Bernoulli: flujo de fluido más rápido en la sección estrecha (baja presión) y más lento en la sección ancha (alta presión).",
                ),
            )
            .with_diagram(
                14,
                Diagram::placeholder(
                    "Gráfico de la posición vs tiempo para el Movimiento Armónico Simple (MAS) de un sistema masa-resorte, mostrando Amplitud (A), Periodo (T) y fase (phi).",
                ),
            )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::serway_volume_one()
    }
}

const SERWAY_TITLES: &[(u32, &str)] = &[
    (1, "Capítulo 1: Medición y Vectores"),
    (2, "Capítulo 2: Movimiento en Una Dimensión"),
    (3, "Capítulo 3: Vectores y Movimiento en Dos Dimensiones"),
    (4, "Capítulo 4: Dinámica: Leyes de Newton"),
    (5, "Capítulo 5: Aplicaciones de las Leyes de Newton"),
    (6, "Capítulo 6: Trabajo y Energía Cinética"),
    (7, "Capítulo 7: Energía Potencial y Conservación"),
    (8, "Capítulo 8: Momentum Lineal y Colisiones"),
    (9, "Capítulo 9: Rotación de Cuerpos Rígidos"),
    (10, "Capítulo 10: Momento Angular"),
    (11, "Capítulo 11: Equilibrio Estático y Elasticidad"),
    (12, "Capítulo 12: Gravitación Universal"),
    (13, "Capítulo 13: Mecánica de Fluidos"),
    (14, "Capítulo 14: Movimiento Oscilatorio"),
    (15, "Capítulo 15: Movimiento Ondulatorio"),
    (16, "Capítulo 16: Ondas Sonoras"),
    (17, "Capítulo 17: Sobreposición y Ondas Estacionarias"),
    (18, "Capítulo 18: Temperatura, Calor y 1ra Ley"),
    (19, "Capítulo 19: Teoría Cinética de Gases"),
    (20, "Capítulo 20: Máquinas Térmicas y 2da Ley"),
    (21, "Capítulo 21: Entropía"),
    (22, "Capítulo 22: Tópicos de Termodinámica"),
];
