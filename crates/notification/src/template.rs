use playschool_enquiry::TemplateContext;

#[derive(askama::Template)]
#[template(path = "enquiry.txt")]
pub struct EnquiryPlainTemplate<'a> {
    pub context: &'a TemplateContext,
}

pub fn render<T: askama::Template>(template: T) -> anyhow::Result<String> {
    Ok(template.render()?)
}
