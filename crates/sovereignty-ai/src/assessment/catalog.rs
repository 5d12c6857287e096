//! Localized catalogs for the eight sovereignty objectives and the SEAL
//! maturity scale, transcribed from the European Commission Cloud
//! Sovereignty Framework working documents.
//!
//! Catalog text is static per language. Identifiers, weights, and levels
//! are identical across languages, so session state keyed by id survives
//! a language switch untouched.

use serde::Serialize;

use super::domain::{Language, ObjectiveId};

/// One rated objective of the framework, in a concrete language.
#[derive(Debug, Clone, Serialize)]
pub struct Objective {
    pub id: ObjectiveId,
    pub name: &'static str,
    pub weight: f64,
    pub description: &'static str,
    pub factors: Vec<&'static str>,
}

/// One level of the SEAL maturity scale, in a concrete language.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SealDefinition {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// Convenience pair used by snapshot and report assembly.
pub fn catalog_for(language: Language) -> (Vec<Objective>, Vec<SealDefinition>) {
    (objectives_for(language), seal_definitions_for(language))
}

/// Catalog entry for a single objective. The tables carry every id in
/// [`ObjectiveId::ordered`] order, so the positional lookup is total.
pub fn objective_for(language: Language, id: ObjectiveId) -> Objective {
    let mut objectives = objectives_for(language);
    objectives.swap_remove(id.position())
}

pub fn objectives_for(language: Language) -> Vec<Objective> {
    match language {
        Language::En => english_objectives(),
        Language::Es => spanish_objectives(),
    }
}

pub fn seal_definitions_for(language: Language) -> Vec<SealDefinition> {
    match language {
        Language::En => english_seal_definitions(),
        Language::Es => spanish_seal_definitions(),
    }
}

fn english_objectives() -> Vec<Objective> {
    vec![
        Objective {
            id: ObjectiveId::Sov1,
            name: "Strategic Sovereignty",
            weight: 0.15,
            description: "Anchoring in the EU legal, financial, and industrial ecosystem.",
            factors: vec![
                "Decision-making authority located in EU jurisdiction.",
                "Assurance against changes of control.",
                "Dependence on funding from EU sources.",
                "Investment, jobs, and value creation in the EU.",
                "Consistency with EU digital, green, and industrial objectives.",
                "Ability to maintain operations in the face of external requests for cessation.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov2,
            name: "Legal and Jurisdictional Sovereignty",
            weight: 0.10,
            description: "Legal environment, exposure to foreign authorities, and enforceability of rights.",
            factors: vec![
                "National legal system governing operations and contracts.",
                "Degree of exposure to extra-community laws (e.g., US CLOUD Act).",
                "Legal or technical channels of forced access by non-EU authorities.",
                "Applicability of restrictive international regimes.",
                "Jurisdiction of creation and registration of intellectual property (IP).",
            ],
        },
        Objective {
            id: ObjectiveId::Sov3,
            name: "Data and AI Sovereignty",
            weight: 0.10,
            description: "Protection, control, and independence of data assets and AI services.",
            factors: vec![
                "Exclusive customer control over cryptographic access.",
                "Visibility and auditability of data access and AI use.",
                "Strict confinement of storage and processing in the EU.",
                "Development and governance of AI models under EU control.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov4,
            name: "Operational Sovereignty",
            weight: 0.15,
            description: "Practical ability to execute and evolve technology independently.",
            factors: vec![
                "Ease of migration without vendor lock-in.",
                "Capability of management and support without involving non-EU providers.",
                "Existence of specialized local talent in the EU.",
                "Operational support delivered from the EU under local laws.",
                "Availability of complete technical documentation and source code.",
                "Legal control of critical subcontractors.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov5,
            name: "Supply Chain Sovereignty",
            weight: 0.20,
            description: "Geographical origin, transparency, and resilience of the technology chain.",
            factors: vec![
                "Geographical origin of critical physical components.",
                "Jurisdiction and source of firmware/hardware code.",
                "Place of architecture and software programming.",
                "Degree of dependence on non-EU proprietary facilities or technologies.",
                "Visibility and audit rights for the entire supply chain.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov6,
            name: "Technological Sovereignty",
            weight: 0.15,
            description: "Degree of openness, transparency, and independence of the technology stack.",
            factors: vec![
                "Use of documented and non-proprietary APIs and protocols.",
                "Software accessible under open licenses (Open Source).",
                "Visibility in the design and operation of the service.",
                "Independence in high-performance computing (HPC).",
            ],
        },
        Objective {
            id: ObjectiveId::Sov7,
            name: "Security and Compliance Sovereignty",
            weight: 0.10,
            description: "Control of security operations and compliance obligations.",
            factors: vec![
                "Obtainment of EU certifications (e.g., ENISA, ISO).",
                "Adherence to GDPR, NIS2, DORA.",
                "SOC and response teams operating exclusively under EU jurisdiction.",
                "Autonomy of maintenance and application of security patches.",
                "Capability to perform independent audits with full access.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov8,
            name: "Environmental Sustainability",
            weight: 0.05,
            description: "Autonomy and resilience in relation to the use of energy and raw materials.",
            factors: vec![
                "Adoption of energy-efficient infrastructure (low PUE).",
                "Circular economy practices and end-of-life management.",
                "Transparency in carbon emissions measurement.",
                "Use of renewable energy in infrastructure.",
            ],
        },
    ]
}

fn spanish_objectives() -> Vec<Objective> {
    vec![
        Objective {
            id: ObjectiveId::Sov1,
            name: "Soberanía Estratégica",
            weight: 0.15,
            description: "Anclaje en el ecosistema legal, financiero e industrial de la UE.",
            factors: vec![
                "Autoridad decisoria ubicada en jurisdicción UE.",
                "Aseguramiento contra cambios de control.",
                "Dependencia de financiación de fuentes UE.",
                "Inversión, empleos y creación de valor en la UE.",
                "Consistencia con objetivos digitales, verdes e industriales de la UE.",
                "Capacidad de mantener operaciones ante solicitudes de cese externas.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov2,
            name: "Soberanía Legal y Jurisdiccional",
            weight: 0.10,
            description: "Entorno legal, exposición a autoridades extranjeras y exigibilidad de derechos.",
            factors: vec![
                "Sistema legal nacional que rige operaciones y contratos.",
                "Grado de exposición a leyes extra-comunitarias (ej. US CLOUD Act).",
                "Canales legales o técnicos de acceso forzado por autoridades no-UE.",
                "Aplicabilidad de regímenes internacionales restrictivos.",
                "Jurisdicción de creación y registro de propiedad intelectual (IP).",
            ],
        },
        Objective {
            id: ObjectiveId::Sov3,
            name: "Soberanía de Datos e IA",
            weight: 0.10,
            description: "Protección, control e independencia de activos de datos y servicios de IA.",
            factors: vec![
                "Control exclusivo del cliente sobre el acceso criptográfico.",
                "Visibilidad y auditabilidad de acceso a datos y uso de IA.",
                "Confinamiento estricto de almacenamiento y procesado en la UE.",
                "Desarrollo y gobernanza de modelos de IA bajo control UE.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov4,
            name: "Soberanía Operativa",
            weight: 0.15,
            description: "Capacidad práctica de ejecutar y evolucionar la tecnología independientemente.",
            factors: vec![
                "Facilidad de migración sin bloqueo del proveedor (lock-in).",
                "Capacidad de gestión y soporte sin involucrar proveedores no-UE.",
                "Existencia de talento local especializado en la UE.",
                "Soporte operativo entregado desde la UE bajo leyes locales.",
                "Disponibilidad de documentación técnica completa y código fuente.",
                "Control legal de subcontratistas críticos.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov5,
            name: "Soberanía de la Cadena de Suministro",
            weight: 0.20,
            description: "Origen geográfico, transparencia y resiliencia de la cadena tecnológica.",
            factors: vec![
                "Origen geográfico de componentes físicos críticos.",
                "Jurisdicción y procedencia del código de firmware/hardware.",
                "Lugar de arquitectura y programación del software.",
                "Grado de dependencia de instalaciones o tecnologías propietarias no-UE.",
                "Visibilidad y derechos de auditoría de toda la cadena de suministro.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov6,
            name: "Soberanía Tecnológica",
            weight: 0.15,
            description: "Grado de apertura, transparencia e independencia del stack tecnológico.",
            factors: vec![
                "Uso de APIs y protocolos documentados y no propietarios.",
                "Software accesible bajo licencias abiertas (Open Source).",
                "Visibilidad en el diseño y funcionamiento del servicio.",
                "Independencia en computación de alto rendimiento (HPC).",
            ],
        },
        Objective {
            id: ObjectiveId::Sov7,
            name: "Soberanía de Seguridad y Cumplimiento",
            weight: 0.10,
            description: "Control de operaciones de seguridad y obligaciones de cumplimiento.",
            factors: vec![
                "Obtención de certificaciones UE (ej. ENISA, ISO).",
                "Adherencia a GDPR, NIS2, DORA.",
                "SOC y equipos de respuesta operando exclusivamente bajo jurisdicción UE.",
                "Autonomía de mantenimiento y aplicación de parches de seguridad.",
                "Capacidad de realizar auditorías independientes con acceso total.",
            ],
        },
        Objective {
            id: ObjectiveId::Sov8,
            name: "Sostenibilidad Ambiental",
            weight: 0.05,
            description: "Autonomía y resiliencia en relación al uso de energía y materias primas.",
            factors: vec![
                "Adopción de infraestructura energéticamente eficiente (PUE bajo).",
                "Prácticas de economía circular y gestión de fin de vida.",
                "Transparencia en la medición de emisiones de carbono.",
                "Uso de energía renovable en la infraestructura.",
            ],
        },
    ]
}

fn english_seal_definitions() -> Vec<SealDefinition> {
    vec![
        SealDefinition {
            level: 0,
            name: "No Sovereignty",
            description: "Exclusive control by non-EU third parties.",
        },
        SealDefinition {
            level: 1,
            name: "Jurisdictional Sovereignty",
            description: "EU law formally applies but with limited practical applicability.",
        },
        SealDefinition {
            level: 2,
            name: "Data Sovereignty",
            description: "EU law applicable and enforceable, with material dependencies outside the EU.",
        },
        SealDefinition {
            level: 3,
            name: "Digital Resilience",
            description: "EU actors exercising significant but not total influence.",
        },
        SealDefinition {
            level: 4,
            name: "Total Digital Sovereignty",
            description: "Complete EU control, subject only to EU laws, without external dependencies.",
        },
    ]
}

fn spanish_seal_definitions() -> Vec<SealDefinition> {
    vec![
        SealDefinition {
            level: 0,
            name: "Sin Soberanía",
            description: "Control exclusivo de terceros no pertenecientes a la UE.",
        },
        SealDefinition {
            level: 1,
            name: "Soberanía Jurisdiccional",
            description: "La legislación de la UE se aplica formalmente pero con una aplicabilidad práctica limitada.",
        },
        SealDefinition {
            level: 2,
            name: "Soberanía de Datos",
            description: "Legislación de la UE aplicable y exigible, con dependencias materiales fuera de la UE.",
        },
        SealDefinition {
            level: 3,
            name: "Resiliencia Digital",
            description: "Actores de la UE ejerciendo una influencia significativa pero no total.",
        },
        SealDefinition {
            level: 4,
            name: "Soberanía Digital Total",
            description: "Control completo de la UE, sujeto únicamente a leyes de la UE, sin dependencias críticas externas.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::MAX_SEAL_LEVEL;

    #[test]
    fn weights_sum_to_one_in_every_language() {
        for language in Language::ordered() {
            let total: f64 = objectives_for(language).iter().map(|o| o.weight).sum();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "weights for {:?} sum to {total}",
                language
            );
        }
    }

    #[test]
    fn objectives_follow_canonical_order() {
        for language in Language::ordered() {
            let objectives = objectives_for(language);
            assert_eq!(objectives.len(), 8);
            for (objective, expected) in objectives.iter().zip(ObjectiveId::ordered()) {
                assert_eq!(objective.id, expected);
            }
        }
    }

    #[test]
    fn seal_scale_is_contiguous_from_zero() {
        for language in Language::ordered() {
            let definitions = seal_definitions_for(language);
            assert_eq!(definitions.len(), (MAX_SEAL_LEVEL + 1) as usize);
            for (index, definition) in definitions.iter().enumerate() {
                assert_eq!(definition.level, index as u8);
            }
        }
    }

    #[test]
    fn single_objective_lookup_matches_the_table() {
        for language in Language::ordered() {
            for id in ObjectiveId::ordered() {
                let objective = objective_for(language, id);
                assert_eq!(objective.id, id);
            }
        }
        assert_eq!(
            objective_for(Language::En, ObjectiveId::Sov5).name,
            "Supply Chain Sovereignty"
        );
    }

    #[test]
    fn languages_share_weights_per_objective() {
        let spanish = objectives_for(Language::Es);
        let english = objectives_for(Language::En);
        for (es, en) in spanish.iter().zip(english.iter()) {
            assert_eq!(es.id, en.id);
            assert_eq!(es.weight, en.weight);
        }
    }

    #[test]
    fn every_objective_names_its_factors() {
        for language in Language::ordered() {
            for objective in objectives_for(language) {
                assert!(!objective.name.is_empty());
                assert!(!objective.description.is_empty());
                assert!(objective.factors.len() >= 4);
            }
        }
    }
}
