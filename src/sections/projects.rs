use yew::prelude::*;

use crate::components::dialog::{use_modal, Dialog};
use crate::components::reveal::AnimatedSection;
use crate::state::sections::SectionId;

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub category: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Devsbook",
        image: "/img/devsbook.png",
        description: "Rede social completa desenvolvida com PHP e MySQL. Possui sistema de autenticação, CRUD completo, upload de imagens, configurações de usuário, comentários e likes em posts.",
        technologies: &["HTML/CSS", "JavaScript", "PHP", "MySQL"],
        github_url: "https://github.com/J-Breno/php_curso/tree/main/projeto/devsbook",
        live_url: "https://jbrenojdev.com.br/app/public/login.php",
        category: "Fullstack",
    },
    Project {
        title: "Dashgo",
        image: "/img/dashgo.png",
        description: "Dashboard moderna desenvolvida com Next.js e Chakra UI. Focada em responsividade e design system, oferece uma experiência fluida para visualização e gestão de dados.",
        technologies: &["TypeScript", "Next.js", "Chakra UI", "React"],
        github_url: "https://github.com/J-Breno/nextjs/tree/main/04-dashgo",
        live_url: "https://dashgo-brenodev.netlify.app/",
        category: "Frontend",
    },
    Project {
        title: "Shop Base",
        image: "/img/shop-base.png",
        description: "E-commerce moderno desenvolvido com Next.js e CSS Modules. Loja virtual com catálogo de produtos, carrinho de compras e interface responsiva.",
        technologies: &["TypeScript", "Next.js", "CSS Modules", "Stripe"],
        github_url: "https://github.com/J-Breno/nextjs/tree/main/01-ignite-shop",
        live_url: "https://shopbrenodev.netlify.app/",
        category: "Frontend",
    },
];

pub const ALL_CATEGORIES: &str = "Todos";
pub const CATEGORIES: [&str; 4] = [ALL_CATEGORIES, "Fullstack", "Frontend", "Backend"];

pub fn filter_projects(category: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| category == ALL_CATEGORIES || project.category == category)
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub is_dark: bool,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let modal = use_modal::<&'static Project>();
    let category = use_state_eq(|| ALL_CATEGORIES);
    let theme = if props.is_dark { "dark" } else { "light" };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_| modal.close())
    };

    let visible = filter_projects(*category);

    html! {
        <section id={SectionId::Projetos.dom_id()} class={classes!("projects", theme)}>
            <style>
                {r#"
                    .projects { padding: 5rem 1rem; }
                    .projects.dark { background: linear-gradient(135deg, #111827, #000, #111827); color: #fff; }
                    .projects.light { background: linear-gradient(135deg, #eff6ff, #f9fafb, #f3f4f6); color: #1f2937; }
                    .filter-bar { display: flex; justify-content: center; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 3rem; }
                    .filter-button {
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        border: none;
                        cursor: pointer;
                        font-weight: 500;
                        background: transparent;
                        color: inherit;
                    }
                    .filter-button.active { background: #FFAE00; color: #111827; }
                    .projects-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .project-card { border-radius: 1rem; overflow: hidden; cursor: pointer; transition: transform 0.3s ease; }
                    .projects.dark .project-card { background: rgba(31, 41, 55, 0.5); }
                    .projects.light .project-card { background: #fff; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06); }
                    .project-card:hover { transform: translateY(-6px); }
                    .project-card img { width: 100%; height: 12rem; object-fit: cover; }
                    .project-body { padding: 1.5rem; }
                    .tech-list { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
                    .tech { padding: 0.25rem 0.6rem; border-radius: 9999px; font-size: 0.75rem; background: rgba(255, 174, 0, 0.15); color: #FFAE00; }
                    .project-links { display: flex; gap: 1rem; }
                    .project-links a { color: #FFAE00; font-weight: 600; text-decoration: none; }
                    .empty-category { text-align: center; opacity: 0.7; }
                "#}
            </style>
            <AnimatedSection class="section-heading">
                <h2>{"Meus "}<span class="accent">{"Projetos"}</span></h2>
            </AnimatedSection>
            <div class="filter-bar">
                { for CATEGORIES.into_iter().map(|name| {
                    let onclick = {
                        let category = category.clone();
                        Callback::from(move |_: MouseEvent| category.set(name))
                    };
                    html! {
                        <button key={name} class={classes!("filter-button", (*category == name).then(|| "active"))} {onclick}>
                            { name }
                        </button>
                    }
                }) }
            </div>
            if visible.is_empty() {
                <p class="empty-category">{"Nenhum projeto nesta categoria ainda."}</p>
            }
            <div class="projects-grid">
                { for visible.into_iter().enumerate().map(|(i, project)| {
                    let onclick = {
                        let modal = modal.clone();
                        Callback::from(move |_: MouseEvent| modal.open(project))
                    };
                    html! {
                        <AnimatedSection key={project.title} delay={i as f64 * 0.1}>
                            <div class="project-card" {onclick}>
                                <img src={project.image} alt={project.title} loading="lazy" />
                                <div class="project-body">
                                    <span class="tech">{ project.category }</span>
                                    <h3>{ project.title }</h3>
                                    <div class="tech-list">
                                        { for project.technologies.iter().map(|tech| html! { <span class="tech">{ *tech }</span> }) }
                                    </div>
                                    <span class="accent">{"Ver detalhes →"}</span>
                                </div>
                            </div>
                        </AnimatedSection>
                    }
                }) }
            </div>
            if let Some(project) = modal.selected() {
                <Dialog open={modal.is_open()} is_dark={props.is_dark} title={project.title} on_close={on_close}>
                    <img src={project.image} alt={project.title} style="width: 100%; border-radius: 0.75rem;" />
                    <p>{ project.description }</p>
                    <div class="tech-list">
                        { for project.technologies.iter().map(|tech| html! { <span class="tech">{ *tech }</span> }) }
                    </div>
                    <div class="project-links">
                        <a href={project.github_url} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        <a href={project.live_url} target="_blank" rel="noopener noreferrer">{"Ver online"}</a>
                    </div>
                </Dialog>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(category: &str) -> Vec<&'static str> {
        filter_projects(category).into_iter().map(|p| p.title).collect()
    }

    #[test]
    fn all_shows_every_project() {
        assert_eq!(titles(ALL_CATEGORIES), vec!["Devsbook", "Dashgo", "Shop Base"]);
    }

    #[test]
    fn category_is_an_exact_match() {
        assert_eq!(titles("Frontend"), vec!["Dashgo", "Shop Base"]);
        assert_eq!(titles("Fullstack"), vec!["Devsbook"]);
        assert!(titles("Backend").is_empty());
        assert!(titles("frontend").is_empty());
    }
}
