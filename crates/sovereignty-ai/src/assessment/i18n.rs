//! Static surface strings per language. Catalog text lives in
//! [`super::catalog`]; this module only carries the labels the report
//! exporter and the HTTP layer print around it.

use super::domain::Language;

#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub report_title: &'static str,
    pub report_subtitle: &'static str,
    pub global_score: &'static str,
    pub average_maturity: &'static str,
    pub seal_guide: &'static str,
    pub objective: &'static str,
    /// Generic message surfaced when the advisory gateway fails.
    pub advisor_error: &'static str,
}

const SPANISH: Labels = Labels {
    report_title: "Evaluador de Soberanía Cloud UE",
    report_subtitle: "Autoevaluación según el Marco de Soberanía Cloud de la Comisión Europea",
    global_score: "Puntuación Global",
    average_maturity: "Madurez Media",
    seal_guide: "Guía de Niveles SEAL",
    objective: "Objetivo",
    advisor_error: "Lo sentimos, hubo un error al procesar tu consulta con el asesor de IA. Por favor, comprueba tu conexión o inténtalo de nuevo más tarde.",
};

const ENGLISH: Labels = Labels {
    report_title: "EU Cloud Sovereignty Assessor",
    report_subtitle: "Self-assessment under the European Commission Cloud Sovereignty Framework",
    global_score: "Global Score",
    average_maturity: "Average Maturity",
    seal_guide: "SEAL Level Guide",
    objective: "Objective",
    advisor_error: "Sorry, there was an error processing your request with the AI advisor. Please check your connection or try again later.",
};

pub const fn labels_for(language: Language) -> &'static Labels {
    match language {
        Language::Es => &SPANISH,
        Language::En => &ENGLISH,
    }
}
