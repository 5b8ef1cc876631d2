use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::case_overlay::{CaseStudy, Testimonials};
use crate::components::counters::{ServiceStats, Stat};
use crate::components::newsletter::Newsletter;
use crate::components::scroll::StickyCtaBar;
use crate::components::tilt::TiltCard;
use crate::components::typed::TypedHeading;
use crate::wizard::quiz::{QuizProvider, QuizTrigger};
use crate::wizard::roi::{RoiProvider, RoiTrigger};
use crate::Route;

fn stats() -> Vec<Stat> {
    [
        ("120+", "clientes atendidos"),
        ("3.8x", "retorno médio em mídia"),
        ("99%", "projetos entregues no prazo"),
    ]
    .into_iter()
    .map(|(label, caption)| Stat {
        label: label.into(),
        caption: caption.into(),
    })
    .collect()
}

fn cases() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: "clinica".into(),
            client: "Clínica Vida Plena".into(),
            quote: "Dobramos os agendamentos em três meses.".into(),
            details: vec![
                "Desafio: agenda ociosa e dependência de indicações.".into(),
                "Estratégia: campanhas locais de busca e funil de WhatsApp.".into(),
                "Resultado: 2,1x mais consultas e custo por lead 40% menor.".into(),
            ],
        },
        CaseStudy {
            id: "varejo".into(),
            client: "Casa Aurora Decor".into(),
            quote: "A loja online virou nosso principal canal.".into(),
            details: vec![
                "Desafio: vendas concentradas na loja física.".into(),
                "Estratégia: catálogo otimizado, remarketing e automação de carrinho.".into(),
                "Resultado: faturamento online 3,8x maior em um ano.".into(),
            ],
        },
        CaseStudy {
            id: "saas".into(),
            client: "Fluxo ERP".into(),
            quote: "Leads mais qualificados e um time comercial mais focado.".into(),
            details: vec![
                "Desafio: muitos cadastros, poucas demonstrações.".into(),
                "Estratégia: conteúdo de fundo de funil e lead scoring.".into(),
                "Resultado: taxa de demonstração subiu de 4% para 11%.".into(),
            ],
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <QuizProvider>
        <RoiProvider>
            <div class="landing-page">
                <header class="hero">
                    <div class="hero-content">
                        <TypedHeading />
                        <p class="hero-subtitle">
                            {"Marketing digital orientado a dados para empresas que querem crescer com previsibilidade."}
                        </p>
                        <div class="hero-cta-group">
                            <QuizTrigger class={classes!("btn-primary")}>{"Descubra sua maturidade digital"}</QuizTrigger>
                            <RoiTrigger class={classes!("btn-secondary")}>{"Calcule seu ROI"}</RoiTrigger>
                        </div>
                    </div>
                </header>

                <section id="servicos" class="services">
                    <h2>{"O que fazemos"}</h2>
                    <div class="bento-grid">
                        <TiltCard class={classes!("bento-large")}>
                            <h3>{"Tráfego pago"}</h3>
                            <p>{"Campanhas no Google e Meta com acompanhamento semanal de custo por lead."}</p>
                        </TiltCard>
                        <TiltCard>
                            <h3>{"SEO e conteúdo"}</h3>
                            <p>{"Artigos e páginas que atraem quem já está procurando por você."}</p>
                        </TiltCard>
                        <TiltCard>
                            <h3>{"Automação"}</h3>
                            <p>{"Funis de e-mail e WhatsApp que nutrem leads enquanto você trabalha."}</p>
                        </TiltCard>
                        <TiltCard>
                            <h3>{"Analytics"}</h3>
                            <p>{"Painéis claros para decidir com base em números, não em palpites."}</p>
                        </TiltCard>
                    </div>
                    <ServiceStats stats={stats()} />
                </section>

                <Testimonials cases={cases()} />

                <section class="roi-cta">
                    <h2>{"Quanto o marketing pode render para você?"}</h2>
                    <p>{"Simule receita, lucro e ROI em menos de um minuto."}</p>
                    <RoiTrigger class={classes!("btn-primary")}>{"Abrir calculadora"}</RoiTrigger>
                </section>

                <Newsletter />

                <footer class="site-footer">
                    <p>{"© M2 Estratégia"}</p>
                    <Link<Route> to={Route::Blog} classes="footer-link">{"Blog"}</Link<Route>>
                </footer>

                <StickyCtaBar>
                    <span>{"Pronto para crescer com método?"}</span>
                    <QuizTrigger class={classes!("btn-primary")}>{"Fazer o diagnóstico"}</QuizTrigger>
                </StickyCtaBar>
            </div>
        </RoiProvider>
        </QuizProvider>
    }
}
