use yew::prelude::*;

use crate::components::reveal::AnimatedSection;
use crate::config::SKILLS_COLLAPSED_COUNT;
use crate::state::sections::SectionId;

#[derive(Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", color: "#F7DF1E", description: "Linguagem de programação para desenvolvimento web frontend e backend", tags: &["frontend", "backend"] },
    Skill { name: "Tailwind CSS", color: "#38BDF8", description: "Framework CSS utilitário para desenvolvimento rápido e consistente", tags: &["frontend", "styling", "tools"] },
    Skill { name: "jQuery", color: "#0769AD", description: "Biblioteca JavaScript para manipulação de DOM e AJAX", tags: &["frontend"] },
    Skill { name: "TypeScript", color: "#3178C6", description: "JavaScript tipado para desenvolvimento em grande escala", tags: &["frontend", "backend"] },
    Skill { name: "React / Next", color: "#61DAFB", description: "Biblioteca e framework para interfaces modernas e SSR", tags: &["frontend"] },
    Skill { name: "WordPress", color: "#21759B", description: "CMS para criação de sites e blogs com extensa customização", tags: &["tools", "backend"] },
    Skill { name: "PHP", color: "#777BB4", description: "Linguagem de script para desenvolvimento web do lado do servidor", tags: &["backend"] },
    Skill { name: "Laravel", color: "#FF2D20", description: "Framework PHP elegante para aplicações web robustas", tags: &["backend"] },
    Skill { name: "Docker", color: "#2496ED", description: "Plataforma para desenvolvimento, envio e execução de aplicações em containers", tags: &["tools"] },
    Skill { name: "Git", color: "#F05032", description: "Sistema de controle de versão para rastrear mudanças no código", tags: &["tools"] },
    Skill { name: "MySql", color: "#cf9312", description: "Sistema de gerenciamento de banco de dados relacional de código aberto", tags: &["backend", "tools"] },
    Skill { name: "PHPUnit", color: "#46ad17", description: "Framework de testes para PHP com suporte a testes unitários", tags: &["backend", "tools"] },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    All,
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::All,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    fn tag(self) -> Option<&'static str> {
        match self {
            SkillCategory::All => None,
            SkillCategory::Frontend => Some("frontend"),
            SkillCategory::Backend => Some("backend"),
            SkillCategory::Tools => Some("tools"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::All => "Todas",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Ferramentas",
        }
    }
}

/// Skills to render and whether a "show more" toggle is needed.
pub fn visible_skills(category: SkillCategory, show_all: bool) -> (Vec<&'static Skill>, bool) {
    let matching: Vec<&'static Skill> = SKILLS
        .iter()
        .filter(|skill| category.tag().map_or(true, |tag| skill.tags.contains(&tag)))
        .collect();
    let has_more = matching.len() > SKILLS_COLLAPSED_COUNT;
    let shown = if show_all {
        matching
    } else {
        matching.into_iter().take(SKILLS_COLLAPSED_COUNT).collect()
    };
    (shown, has_more)
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub is_dark: bool,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let category = use_state_eq(|| SkillCategory::All);
    let show_all = use_state_eq(|| false);
    let hovered = use_state_eq(|| None::<usize>);
    let theme = if props.is_dark { "dark" } else { "light" };

    let (shown, has_more) = visible_skills(*category, *show_all);

    let toggle_show_all = {
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| show_all.set(!*show_all))
    };

    html! {
        <section id={SectionId::Habilidades.dom_id()} class={classes!("skills", theme)}>
            <style>
                {r#"
                    .skills { padding: 5rem 1rem; }
                    .skills.dark { background: linear-gradient(135deg, #111827, #000, #111827); color: #fff; }
                    .skills.light { background: linear-gradient(135deg, #eff6ff, #fff, #f3f4f6); color: #111827; }
                    .category-bar { display: flex; justify-content: center; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 3rem; }
                    .category-button {
                        padding: 0.75rem 1.25rem;
                        border-radius: 0.75rem;
                        cursor: pointer;
                        font-weight: 500;
                        border: 1px solid rgba(107, 114, 128, 0.4);
                        background: transparent;
                        color: inherit;
                    }
                    .category-button.active { border-color: transparent; color: #fff; background: linear-gradient(to right, #FFAE00, #f97316); }
                    .skills-grid {
                        max-width: 1152px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .skill-card { border-radius: 1rem; padding: 1.5rem; border: 1px solid rgba(107, 114, 128, 0.25); transition: transform 0.3s ease; }
                    .skill-card.hovered { transform: translateY(-4px) scale(1.02); }
                    .skill-dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; display: inline-block; margin-right: 0.5rem; }
                    .skill-description { font-size: 0.875rem; opacity: 0; max-height: 0; overflow: hidden; transition: all 0.3s ease; }
                    .skill-card.hovered .skill-description { opacity: 0.8; max-height: 6rem; }
                    .show-more { display: block; margin: 2.5rem auto 0; padding: 0.75rem 1.5rem; border-radius: 0.75rem; border: none; cursor: pointer; font-weight: 600; background: #FFAE00; color: #111827; }
                "#}
            </style>
            <AnimatedSection class="section-heading">
                <h2>{"Minhas "}<span class="accent">{"Habilidades"}</span></h2>
            </AnimatedSection>
            <div class="category-bar">
                { for SkillCategory::ALL.into_iter().map(|entry| {
                    let onclick = {
                        let category = category.clone();
                        let show_all = show_all.clone();
                        Callback::from(move |_: MouseEvent| {
                            category.set(entry);
                            show_all.set(false);
                        })
                    };
                    html! {
                        <button key={entry.label()} class={classes!("category-button", (*category == entry).then(|| "active"))} {onclick}>
                            { entry.label() }
                        </button>
                    }
                }) }
            </div>
            <div class="skills-grid">
                { for shown.into_iter().enumerate().map(|(i, skill)| {
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    html! {
                        <AnimatedSection key={skill.name} delay={i as f64 * 0.05}>
                            <div
                                class={classes!("skill-card", (*hovered == Some(i)).then(|| "hovered"))}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <h3>
                                    <span class="skill-dot" style={format!("background: {};", skill.color)}></span>
                                    { skill.name }
                                </h3>
                                <p class="skill-description">{ skill.description }</p>
                            </div>
                        </AnimatedSection>
                    }
                }) }
            </div>
            if has_more {
                <button class="show-more" onclick={toggle_show_all}>
                    { if *show_all { "Ver Menos" } else { "Ver Mais" } }
                </button>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(skills: &[&Skill]) -> Vec<&'static str> {
        skills.iter().map(|s| s.name).collect()
    }

    #[test]
    fn all_is_collapsed_to_eight() {
        let (shown, has_more) = visible_skills(SkillCategory::All, false);
        assert_eq!(shown.len(), SKILLS_COLLAPSED_COUNT);
        assert!(has_more);

        let (shown, _) = visible_skills(SkillCategory::All, true);
        assert_eq!(shown.len(), SKILLS.len());
    }

    #[test]
    fn category_matches_on_tag_membership() {
        let (shown, has_more) = visible_skills(SkillCategory::Tools, false);
        assert_eq!(
            names(&shown),
            vec!["Tailwind CSS", "WordPress", "Docker", "Git", "MySql", "PHPUnit"]
        );
        assert!(!has_more);
    }

    #[test]
    fn small_categories_need_no_toggle() {
        let (collapsed, has_more) = visible_skills(SkillCategory::Frontend, false);
        let (expanded, _) = visible_skills(SkillCategory::Frontend, true);
        assert!(!has_more);
        assert_eq!(collapsed, expanded);
    }
}
