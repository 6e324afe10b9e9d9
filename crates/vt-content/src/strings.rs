//! pt-BR interface strings.

pub const FIELD_REQUIRED: &str = "Este campo é obrigatório.";
pub const INVALID_EMAIL: &str = "Por favor, insira um email válido.";
pub const INVALID_PHONE: &str = "Por favor, insira um telefone válido.";
pub const NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 2 caracteres.";
pub const MESSAGE_TOO_SHORT: &str = "Mensagem deve ter pelo menos 10 caracteres.";
pub const PRIVACY_REQUIRED: &str = "Você deve aceitar os termos de privacidade.";

pub const SUBMITTING_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Enviando..."#;
pub const SUBMIT_SUCCESS: &str =
    "Mensagem enviada com sucesso! Entraremos em contato em breve.";

pub const SKIP_LINK: &str = "Pular para o conteúdo principal";

pub const LABEL_CLOSE: &str = "Fechar";
pub const LABEL_BACK_TO_TOP: &str = "Voltar ao topo";

pub const REQUEST_QUOTE: &str = "Solicitar Orçamento";
pub const INCLUDED_HEADING: &str = "O que está incluído:";
pub const TECH_HEADING: &str = "Tecnologias utilizadas:";
