use crate::templates::{portal_layout, LayoutCtx};
use maud::{html, Markup};

/// Password change form. Nothing is checked against or stored on a backend.
pub fn password_page(ctx: &LayoutCtx) -> Markup {
    portal_layout(
        "Change Password",
        ctx,
        html! {
            section class="card narrow" {
                h2 { "Change Password" }
                p class="muted" { "Please change your password for security purposes." }
                form method="post" action="/account/password" class="stack" {
                    label for="current_password" { "Current Password" }
                    input type="password" id="current_password" name="current_password"
                        placeholder="Enter current password (vrrnestuser)";

                    label for="new_password" { "New Password" }
                    input type="password" id="new_password" name="new_password"
                        placeholder="Enter new password" required;

                    label for="confirm_password" { "Confirm New Password" }
                    input type="password" id="confirm_password" name="confirm_password"
                        placeholder="Confirm new password" required;

                    button type="submit" class="btn btn-primary" { "Change Password" }
                }
            }
        },
    )
}
