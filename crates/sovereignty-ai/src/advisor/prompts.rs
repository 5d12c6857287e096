//! Prompt templates for the advisory gateway. System instructions carry
//! the expert persona and the reply language; prompt bodies carry the
//! per-call material.

use std::fmt::Write as _;

use crate::assessment::catalog::objectives_for;
use crate::assessment::domain::Language;

pub(super) fn advice_system_instruction(objective_name: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            "Act as an expert in the European Commission's Cloud Sovereignty Framework. \
             Analyze the provided evidence for the objective \"{objective_name}\". \
             Provide your response in ENGLISH."
        ),
        Language::Es => format!(
            "Actúa como un experto en el Marco de Soberanía Cloud de la Comisión Europea. \
             Analiza la evidencia proporcionada para el objetivo \"{objective_name}\". \
             Proporciona tu respuesta en ESPAÑOL."
        ),
    }
}

pub(super) fn advice_prompt(factors: &[&str], evidence: &str) -> String {
    let mut prompt = String::from("Critical factors to consider:\n");
    for factor in factors {
        writeln!(&mut prompt, "- {factor}").expect("write factor");
    }
    write!(
        &mut prompt,
        "\nProvider's description of evidence:\n\"{evidence}\"\n\n\
         Please provide your expert analysis including:\n\
         1. A suggested SEAL level (0-4).\n\
         2. Detailed justification based on the contributing factors and European regulations.\n\
         3. Specific recommendations to improve the sovereignty level in this area."
    )
    .expect("write advice prompt");
    prompt
}

pub(super) fn auto_assess_system_instruction(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Act as an expert in the European Commission's Cloud Sovereignty Framework. \
             Rate the described solution against every sovereignty objective. \
             Write all justifications in ENGLISH."
        }
        Language::Es => {
            "Actúa como un experto en el Marco de Soberanía Cloud de la Comisión Europea. \
             Evalúa la solución descrita frente a cada objetivo de soberanía. \
             Escribe todas las justificaciones en ESPAÑOL."
        }
    }
}

pub(super) fn auto_assess_prompt(description: &str, language: Language) -> String {
    let mut prompt = String::from("Sovereignty objectives to rate:\n");
    for objective in objectives_for(language) {
        writeln!(&mut prompt, "- {}: {}", objective.id, objective.name).expect("write objective");
    }
    write!(
        &mut prompt,
        "\nSolution description:\n\"{description}\"\n\n\
         Rate every objective with an integer SEAL level from 0 to 4 and a short justification. \
         Reply with JSON only, no prose and no code fences, exactly in this shape:\n\
         {{\"assessments\":[{{\"id\":\"SOV-1\",\"score\":0,\"justification\":\"...\"}}]}}"
    )
    .expect("write auto-assess prompt");
    prompt
}

pub(super) fn describe_image_system_instruction(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Act as an expert in the European Commission's Cloud Sovereignty Framework. \
             Describe the architecture shown in the provided image. \
             Provide your response in ENGLISH."
        }
        Language::Es => {
            "Actúa como un experto en el Marco de Soberanía Cloud de la Comisión Europea. \
             Describe la arquitectura mostrada en la imagen proporcionada. \
             Proporciona tu respuesta en ESPAÑOL."
        }
    }
}

pub(super) fn describe_image_prompt(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Describe the content of this image and any implications for EU cloud sovereignty."
        }
        Language::Es => {
            "Describe el contenido de esta imagen y cualquier implicación para la soberanía cloud de la UE."
        }
    }
}

pub(super) fn chat_system_instruction(language: Language) -> &'static str {
    match language {
        Language::En => {
            "You are the AI advisor of the EU Cloud Sovereignty Assessor. \
             Answer questions about the European Commission's Cloud Sovereignty Framework, \
             the SEAL maturity levels, and the eight sovereignty objectives. \
             Be concise. Respond in ENGLISH."
        }
        Language::Es => {
            "Eres el asesor de IA del Evaluador de Soberanía Cloud UE. \
             Responde preguntas sobre el Marco de Soberanía Cloud de la Comisión Europea, \
             los niveles de madurez SEAL y los ocho objetivos de soberanía. \
             Sé conciso. Responde en ESPAÑOL."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_prompt_lists_factors_and_asks() {
        let prompt = advice_prompt(
            &["Decision-making authority located in EU jurisdiction."],
            "Our board sits in Madrid.",
        );
        assert!(prompt.starts_with("Critical factors to consider:\n"));
        assert!(prompt.contains("- Decision-making authority located in EU jurisdiction.\n"));
        assert!(prompt.contains("\"Our board sits in Madrid.\""));
        assert!(prompt.contains("1. A suggested SEAL level (0-4)."));
        assert!(prompt.contains("3. Specific recommendations"));
    }

    #[test]
    fn advice_instruction_names_the_objective_per_language() {
        let en = advice_system_instruction("Strategic Sovereignty", Language::En);
        assert!(en.contains("\"Strategic Sovereignty\""));
        assert!(en.contains("ENGLISH"));
        let es = advice_system_instruction("Soberanía Estratégica", Language::Es);
        assert!(es.contains("\"Soberanía Estratégica\""));
        assert!(es.contains("ESPAÑOL"));
    }

    #[test]
    fn auto_assess_prompt_demands_the_json_envelope() {
        let prompt = auto_assess_prompt("A fully EU-hosted platform.", Language::En);
        for id in crate::assessment::domain::ObjectiveId::ordered() {
            assert!(prompt.contains(id.as_str()), "{id} missing from prompt");
        }
        assert!(prompt.contains("{\"assessments\":[{\"id\":\"SOV-1\""));
        assert!(prompt.contains("JSON only"));
    }
}
