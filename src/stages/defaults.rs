use super::Stage;

pub const DEFAULT_NAME: &str = "Agustín";
pub const DEFAULT_BIRTH_DATE: &str = "1988-05-19";
pub const DEFAULT_LIFE_EXPECTANCY: u32 = 76;

/// Name of the default stage whose days count as working time.
pub const CAREER_STAGE: &str = "Carrera y noviazgo";

/// Five-stage layout whose last stage runs until the life expectancy.
pub fn default_stages(life_expectancy: u32) -> Vec<Stage> {
    vec![
        Stage::new("De nacimiento a conciencia", 0, 5, "#FFD700"),
        Stage::new("Infancia consciente", 5, 18, "#87CEEB"),
        Stage::new("Universidad y soltería", 18, 24, "#32CD32"),
        Stage::new(CAREER_STAGE, 24, 37, "#FF8C00"),
        Stage::new("Futuro estimado", 37, life_expectancy, "#F8F8FF"),
    ]
}

/// Six-stage layout with a fixed retirement at 65.
pub fn retirement_stages() -> Vec<Stage> {
    vec![
        Stage::new("De nacimiento a conciencia", 0, 5, "#FFD700"),
        Stage::new("Infancia consciente", 5, 18, "#87CEEB"),
        Stage::new("Universidad y soltería", 18, 24, "#32CD32"),
        Stage::new(CAREER_STAGE, 24, 37, "#FF8C00"),
        Stage::new("Hasta jubilarte", 37, 65, "#FFA07A"),
        Stage::new("Jubilación", 65, DEFAULT_LIFE_EXPECTANCY, "#F8F8FF"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stages_follow_expectancy() {
        let stages = default_stages(90);
        assert_eq!(stages.len(), 5);
        assert_eq!(stages.last().unwrap().age_end, 90);
        assert!(stages.iter().any(|s| s.name == CAREER_STAGE));
    }

    #[test]
    fn test_retirement_stages_are_contiguous() {
        let stages = retirement_stages();
        for pair in stages.windows(2) {
            assert_eq!(pair[0].age_end, pair[1].age_start);
        }
    }
}
