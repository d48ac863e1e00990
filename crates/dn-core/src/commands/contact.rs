//! Contact flags shared by register, transfer and contacts:set

use clap::Args;

use super::input::{Prompt, flag_or_prompt};
use crate::error::Result;
use crate::model::ContactInformation;
use crate::traits::Terminal;

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactArgs {
    /// Contact first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Contact last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone (e.g. +1.5551234567)
    #[arg(long)]
    pub phone: Option<String>,

    /// Organization
    #[arg(long)]
    pub organization: Option<String>,

    /// Street address
    #[arg(long)]
    pub address: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// State/province
    #[arg(long)]
    pub state: Option<String>,

    /// Postal code
    #[arg(long)]
    pub postal_code: Option<String>,

    /// Country code (e.g. US)
    #[arg(long)]
    pub country: Option<String>,
}

impl ContactArgs {
    /// Build contact details, prompting for every missing field in order
    pub fn resolve(&self, terminal: &dyn Terminal) -> Result<ContactInformation> {
        let ask = |flag: &Option<String>, prompt| flag_or_prompt(terminal, flag.as_deref(), prompt);

        let first_name = ask(&self.first_name, Prompt::visible("First name"))?;
        let last_name = ask(&self.last_name, Prompt::visible("Last name"))?;
        let email = ask(&self.email, Prompt::visible("Email"))?;
        let phone = ask(&self.phone, Prompt::visible("Phone (e.g. +1.5551234567)"))?;
        let organization = ask(
            &self.organization,
            Prompt::visible("Organization (leave blank if none)").with_default(""),
        )?;
        let address_1 = ask(&self.address, Prompt::visible("Street address"))?;
        let city = ask(&self.city, Prompt::visible("City"))?;
        let state = ask(&self.state, Prompt::visible("State/province"))?;
        let postal_code = ask(&self.postal_code, Prompt::visible("Postal code"))?;
        let country_code = ask(&self.country, Prompt::visible("Country code (e.g. US)"))?;

        Ok(ContactInformation {
            first_name,
            last_name,
            organization: Some(organization).filter(|org| !org.trim().is_empty()),
            address_1,
            address_2: None,
            postal_code,
            city,
            state,
            country_code,
            email,
            phone,
            fax: None,
        })
    }
}
