//! Question bank - the ordered, immutable questionnaire.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::{ProfileAxis, Question, QuestionTarget};
use crate::domain::foundation::{QuestionId, ValidationError};
use crate::domain::styles::Category;

/// Errors that can occur while loading a bank from a file.
#[derive(Debug, Error)]
pub enum BankLoadError {
    #[error("Failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse question bank: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid question bank: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
struct BankFile {
    questions: Vec<Question>,
}

/// Ordered sequence of questions, loaded once and shared read-only.
///
/// # Invariants
///
/// - at least one question
/// - question ids are unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

impl QuestionBank {
    /// Creates a bank, validating its invariants.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `questions` is empty
    /// - `InvalidFormat` if an id appears twice
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut positions = HashMap::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            if positions.insert(question.id(), index).is_some() {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate question id {}", question.id()),
                ));
            }
        }

        Ok(Self {
            questions,
            positions,
        })
    }

    /// Parses a bank from YAML with a top-level `questions` list.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BankLoadError> {
        let file: BankFile = serde_yaml::from_str(yaml)?;
        Ok(Self::new(file.questions)?)
    }

    /// Reads and parses a YAML bank file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, BankLoadError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// The built-in 32-statement questionnaire.
    pub fn standard() -> &'static QuestionBank {
        &STANDARD_BANK
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.positions.get(&id).map(|&index| &self.questions[index])
    }

    /// Zero-based position of a question in answering order.
    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Question at a zero-based position.
    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Ids of the questions feeding the given profile axis.
    pub fn ids_on_axis(&self, axis: ProfileAxis) -> Vec<QuestionId> {
        self.questions
            .iter()
            .filter(|q| q.axis() == axis)
            .map(|q| q.id())
            .collect()
    }

    /// Number of fixed-category questions per category.
    pub fn fixed_counts(&self) -> HashMap<Category, usize> {
        let mut counts = HashMap::new();
        for question in &self.questions {
            if let QuestionTarget::Fixed(category) = question.target() {
                *counts.entry(*category).or_insert(0) += 1;
            }
        }
        counts
    }
}

const STANDARD_QUESTIONS: &[(u32, &str, Category, ProfileAxis)] = {
    use Category::*;
    use ProfileAxis::*;
    &[
        (1, "Cuando participo en una reunión, suelo expresar mis ideas con firmeza, incluso si no todo el mundo está de acuerdo.", Red, Conscious),
        (2, "Me entusiasma contagiar mi energía cuando presento ideas a un grupo.", Yellow, Conscious),
        (3, "Antes de actuar, necesito tener muy claro el proceso y los pasos a seguir.", Blue, Conscious),
        (4, "Me resulta natural adaptarme a lo que ocurre, incluso cuando cambian los planes de forma repentina.", Green, Conscious),
        (5, "Tiendo a buscar datos concretos y evidencias antes de tomar una decisión.", Blue, Conscious),
        (6, "Cuando lidero, me enfoco en que se cumplan los objetivos sin desviarnos.", Red, Conscious),
        (7, "Me esfuerzo por mantener un ambiente armónico y evitar confrontaciones innecesarias.", Green, Conscious),
        (8, "Me gusta iniciar proyectos nuevos, incluso si implican cierto riesgo o incertidumbre.", Yellow, Conscious),
        (9, "Cuando alguien está pasando por un mal momento, me sale escuchar con empatía y sin juzgar.", Green, Conscious),
        (10, "Prefiero centrarme en la visión general más que en los detalles minuciosos.", Yellow, Conscious),
        (11, "Procuro que todas las personas del equipo se sientan tenidas en cuenta.", Green, Conscious),
        (12, "Uso ejemplos concretos y verificables cuando explico mis argumentos.", Blue, Conscious),
        (13, "Disfruto proponiendo ideas nuevas y creativas, aunque parezcan poco convencionales.", Yellow, Conscious),
        (14, "Me siento incómodo cuando hay que improvisar sin planificación previa.", Blue, Conscious),
        (15, "Me gusta inspirar a otros a través de una visión compartida que genere ilusión.", Yellow, Conscious),
        (16, "Antes de decidir, valoro cómo puede afectar emocionalmente a las personas implicadas.", Green, Conscious),
        (17, "Me gusta trabajar con indicadores claros para medir avances y resultados.", Red, Conscious),
        (18, "Cuando hay presión o conflicto, tiendo a mantener la calma y buscar soluciones prácticas.", Blue, Conscious),
        (19, "Comparto ideas y aprendizajes con entusiasmo para que otros puedan aprovecharlos.", Yellow, Conscious),
        (20, "Puedo comunicar mensajes difíciles de forma directa, aunque no siempre sean bien recibidos.", Red, Conscious),
        (21, "Me esfuerzo en dar contexto y detalles para que todo el mundo comprenda bien la situación.", Blue, Conscious),
        (22, "Transmito confianza a los demás gracias a mi entusiasmo y actitud positiva.", Yellow, Conscious),
        (23, "Escucho con atención y evito interrumpir, incluso cuando quiero aportar mi punto de vista.", Green, Conscious),
        (24, "Cuando cometo un error, lo reconozco y busco cómo solucionarlo sin demora.", Green, Conscious),
        (25, "Si algo no sale como esperaba, reviso con detalle qué ha fallado antes de tomar decisiones nuevas.", Blue, Conscious),
        (26, "Cuando quiero causar buena impresión, adapto mi forma de comunicarme al estilo del interlocutor.", Red, Unconscious),
        (27, "En situaciones tensas, suelo volverme más impaciente o más directo de lo habitual.", Red, Unconscious),
        (28, "Bajo presión, prefiero tomar decisiones rápidas en lugar de analizar cada posibilidad.", Red, Unconscious),
        (29, "Cuando me siento juzgado, tiendo a guardar más silencio o a suavizar mis opiniones.", Blue, Unconscious),
        (30, "En contextos sociales, soy más expresivo o extrovertido que cuando estoy en un entorno profesional.", Yellow, Unconscious),
        (31, "Verifico que mi trabajo esté libre de errores antes de presentarlo.", Blue, Conscious),
        (32, "Establezco metas claras y delego responsabilidades para alcanzarlas.", Red, Conscious),
    ]
};

static STANDARD_BANK: Lazy<QuestionBank> = Lazy::new(|| {
    let questions: Vec<Question> = STANDARD_QUESTIONS
        .iter()
        .map(|(id, text, category, axis)| {
            Question::reconstitute(
                QuestionId::new(*id),
                (*text).to_string(),
                *axis,
                QuestionTarget::Fixed(*category),
            )
        })
        .collect();
    let positions = questions
        .iter()
        .enumerate()
        .map(|(index, q)| (q.id(), index))
        .collect();
    QuestionBank {
        questions,
        positions,
    }
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::{AnswerLevel, OptionTag};

    #[test]
    fn standard_bank_passes_validation() {
        let bank = QuestionBank::standard();
        let rebuilt = QuestionBank::new(bank.questions().to_vec()).unwrap();
        assert_eq!(&rebuilt, bank);
        assert_eq!(bank.len(), 32);
    }

    #[test]
    fn standard_bank_covers_every_category() {
        let counts = QuestionBank::standard().fixed_counts();
        assert_eq!(counts.get(&Category::Red), Some(&8));
        assert_eq!(counts.get(&Category::Yellow), Some(&8));
        assert_eq!(counts.get(&Category::Green), Some(&7));
        assert_eq!(counts.get(&Category::Blue), Some(&9));
    }

    #[test]
    fn standard_bank_axes_partition_the_questions() {
        let bank = QuestionBank::standard();
        let conscious = bank.ids_on_axis(ProfileAxis::Conscious);
        let unconscious = bank.ids_on_axis(ProfileAxis::Unconscious);
        assert_eq!(conscious.len() + unconscious.len(), bank.len());
        assert!(conscious.iter().all(|id| !unconscious.contains(id)));
        assert_eq!(
            unconscious,
            (26..=30).map(QuestionId::new).collect::<Vec<_>>()
        );
    }

    #[test]
    fn lookup_by_id_and_position() {
        let bank = QuestionBank::standard();
        let q = bank.get(QuestionId::new(3)).unwrap();
        assert_eq!(q.target(), &QuestionTarget::Fixed(Category::Blue));
        assert_eq!(bank.position(QuestionId::new(3)), Some(2));
        assert_eq!(bank.at(2).map(|q| q.id()), Some(QuestionId::new(3)));
        assert!(bank.get(QuestionId::new(999)).is_none());
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(
            QuestionBank::new(vec![]),
            Err(ValidationError::empty_field("questions"))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let questions = vec![
            Question::fixed(1, "Uno", Category::Red).unwrap(),
            Question::fixed(1, "Otro", Category::Blue).unwrap(),
        ];
        assert!(matches!(
            QuestionBank::new(questions),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn loads_yaml_with_both_question_shapes() {
        let yaml = r#"
questions:
  - id: 1
    text: "Cuando participo en una reunión, suelo expresar mis ideas con firmeza."
    options:
      - level: "Totalmente de acuerdo"
        category: Rojo
      - level: "De acuerdo"
        category: Amarillo
      - level: "En desacuerdo"
        category: Verde
      - level: "Para nada de acuerdo"
        category: Azul
  - id: 2
    text: "Bajo presión, prefiero tomar decisiones rápidas."
    axis: unconscious
    category: Rojo
"#;
        let bank = QuestionBank::from_yaml_str(yaml).unwrap();
        assert_eq!(bank.len(), 2);

        let first = bank.get(QuestionId::new(1)).unwrap();
        assert_eq!(
            first.target(),
            &QuestionTarget::PerOption(vec![
                OptionTag::new(AnswerLevel::Strongly, Category::Red),
                OptionTag::new(AnswerLevel::Fairly, Category::Yellow),
                OptionTag::new(AnswerLevel::Slightly, Category::Green),
                OptionTag::new(AnswerLevel::NotAtAll, Category::Blue),
            ])
        );
        assert_eq!(
            bank.get(QuestionId::new(2)).unwrap().axis(),
            ProfileAxis::Unconscious
        );
    }

    #[test]
    fn yaml_with_unknown_category_fails_to_parse() {
        let yaml = "questions:\n  - id: 1\n    text: \"Texto\"\n    category: Morado\n";
        assert!(matches!(
            QuestionBank::from_yaml_str(yaml),
            Err(BankLoadError::Parse(_))
        ));
    }

    #[test]
    fn yaml_with_duplicate_ids_is_invalid() {
        let yaml = "questions:\n  - {id: 1, text: A, category: Rojo}\n  - {id: 1, text: B, category: Azul}\n";
        assert!(matches!(
            QuestionBank::from_yaml_str(yaml),
            Err(BankLoadError::Invalid(_))
        ));
    }

    #[test]
    fn from_yaml_file_reports_missing_file() {
        let result = QuestionBank::from_yaml_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(BankLoadError::Io(_))));
    }
}
