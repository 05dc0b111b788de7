use crate::templates::components::icons;
use maud::{html, Markup, DOCTYPE};

pub const PROJECT_NAME: &str = "VRR NEST Repainting Project";

/// The tabs of the portal, each served at its own path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Announcements,
    ActionItems,
    Schedule,
    Documents,
    Progress,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Announcements,
        Tab::ActionItems,
        Tab::Schedule,
        Tab::Documents,
        Tab::Progress,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Tab::Dashboard => "/",
            Tab::Announcements => "/announcements",
            Tab::ActionItems => "/action-items",
            Tab::Schedule => "/schedule",
            Tab::Documents => "/documents",
            Tab::Progress => "/progress",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Announcements => "Announcements",
            Tab::ActionItems => "Action Items",
            Tab::Schedule => "Schedule",
            Tab::Documents => "Documents",
            Tab::Progress => "Project Progress",
        }
    }

    pub fn from_path(path: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.path() == path)
    }
}

/// What every page needs besides its own content.
pub struct LayoutCtx<'a> {
    pub active: Option<Tab>,
    pub user_unit: &'a str,
    pub first_login: bool,
}

pub fn portal_layout(title: &str, ctx: &LayoutCtx, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (PROJECT_NAME) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    div class="container header-row" {
                        h1 class="brand" {
                            (icons::paint_bucket())
                            (PROJECT_NAME)
                        }
                        div class="header-user" {
                            span class="unit" { strong { "Unit: " } (ctx.user_unit) }
                            a href="/" class="logout" title="Logout" { (icons::logout()) }
                        }
                    }
                }

                @if ctx.first_login {
                    (password_banner())
                }

                nav class="tabs" {
                    div class="container" {
                        ul {
                            @for tab in Tab::ALL {
                                li {
                                    a href=(tab.path())
                                      class=(if ctx.active == Some(tab) { "tab active" } else { "tab" })
                                      aria-current=[(ctx.active == Some(tab)).then_some("page")]
                                    {
                                        (tab.label())
                                    }
                                }
                            }
                        }
                    }
                }

                main class="container" {
                    (content)
                }

                (footer())
            }
        }
    }
}

fn password_banner() -> Markup {
    html! {
        div class="banner banner-warning" {
            div class="container" {
                p { strong { "Welcome to VRR NEST Repainting Project Portal!" } }
                p { "Please change your initial password for added security." }
                a href="/account/password" class="btn btn-warning" { "Change Password" }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="container" {
                p { "© 2025 VRR NEST Owners Welfare Association" }
                p {
                    "For support: " span class="strong" { "support@vrrnest.com" }
                    " | Helpline: " span class="strong" { "+91 XXXXX XXXXX" }
                }
                p {
                    "Portal URL: "
                    a href="https://vrrnestprojects.azurewebsites.net" { "https://vrrnestprojects.azurewebsites.net" }
                }
            }
        }
    }
}
