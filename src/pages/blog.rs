use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::newsletter::Newsletter;
use crate::components::scroll::ParallaxImage;
use crate::Route;

pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub body: &'static [&'static str],
}

pub const ARTICLES: &[Article] = &[
    Article {
        slug: "funil-de-vendas",
        title: "Funil de vendas: o guia prático para pequenas empresas",
        summary: "Como organizar atração, nutrição e fechamento sem uma equipe enorme.",
        image: "/assets/img/blog-funil.webp",
        date: "12 de agosto de 2025",
        body: &[
            "Um funil de vendas é o caminho que uma pessoa percorre do primeiro contato com a sua marca até a compra.",
            "Comece mapeando de onde vêm os seus leads hoje e em que ponto eles param de responder.",
            "Com o mapa em mãos, escolha uma etapa por vez para melhorar: oferta, página, follow-up ou proposta.",
        ],
    },
    Article {
        slug: "roi-em-marketing",
        title: "ROI em marketing: como calcular e o que fazer com o número",
        summary: "Receita, lucro e retorno explicados com um exemplo real.",
        image: "/assets/img/blog-roi.webp",
        date: "2 de setembro de 2025",
        body: &[
            "ROI é o lucro gerado por uma ação dividido pelo que foi investido nela.",
            "Com 100 leads, 10% de conversão e ticket médio de R$ 200, a receita esperada é de R$ 2.000.",
            "Se o investimento foi de R$ 1.000, o lucro é de R$ 1.000 e o ROI é de 100%.",
        ],
    },
];

pub fn find_article(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.slug == slug)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Blog"}</h1>
                <p>{"Estratégias, números e bastidores do marketing digital."}</p>
            </section>
            <section class="blog-list-section">
                { for ARTICLES.iter().map(|article| html! {
                    <div class="blog-post-preview">
                        <Link<Route> to={Route::BlogPost { slug: article.slug.to_string() }}>
                            <img src={article.image} alt={article.title} loading="lazy" class="blog-preview-image" />
                            <h2>{article.title}</h2>
                            <p>{article.summary}</p>
                            <span class="blog-date">{article.date}</span>
                        </Link<Route>>
                    </div>
                }) }
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        props.slug.clone(),
    );

    let Some(article) = find_article(&props.slug) else {
        return html! { <Redirect<Route> to={Route::Blog} /> };
    };

    html! {
        <article class="blog-page">
            <ParallaxImage src={article.image} alt={article.title} />
            <section class="blog-hero">
                <h1>{article.title}</h1>
                <p>{article.summary}</p>
                <span class="blog-date">{article.date}</span>
            </section>
            <section class="blog-content">
                { for article.body.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                <Link<Route> to={Route::Blog} classes="back-link">{"← Voltar ao blog"}</Link<Route>>
            </section>
            <Newsletter />
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_slugs_resolve() {
        for article in ARTICLES {
            let found = find_article(article.slug).expect("listed article resolves");
            assert_eq!(found.title, article.title);
        }
        assert!(find_article("nao-existe").is_none());
    }
}
