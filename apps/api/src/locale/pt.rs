use super::{Locale, Messages, Question, UiStrings};
use crate::analysis::prompts::SYSTEM_INSTRUCTION_PT;
use crate::wizard::models::IntakeField;

pub(super) static LOCALE: Locale = Locale {
    ui: UiStrings {
        title: "Análise de Risco Contratual",
        subtitle: "Reimaginada",
        description: "A LexGuard usa IA avançada para testar a robustez dos seus contratos. Identificamos riscos ocultos, cláusulas abusivas e proteções ausentes com base em **quem você representa**.",
        risk_card: "Detecção de Riscos",
        risk_desc: "Encontra responsabilidades e armadilhas antes de você assinar.",
        gap_card: "Lacunas Contratuais",
        gap_desc: "Aponta o que está faltando para proteger você.",
        plan_card: "Plano de Negociação",
        plan_desc: "Conselhos práticos para melhorar sua posição.",
        start_btn: "Iniciar Análise",
        context_title: "Contexto da Análise",
        context_desc: "Para fornecer uma análise realista e crítica, a LexGuard precisa entender sua posição.",
        continue_btn: "Continuar para Upload",
        upload_title: "Upload do Contrato",
        upload_desc: "Cole o texto do contrato abaixo ou envie um arquivo PDF ou texto.",
        drag_drop: "Arraste e solte PDF ou arquivo de texto aqui",
        or_paste: "ou cole o texto diretamente",
        back_btn: "Voltar ao Contexto",
        analyze_btn: "Iniciar Análise",
        analyzing_title: "Analisando Contrato...",
        analyzing_desc: "Nossa IA está lendo o documento, cruzando informações com seus interesses e identificando riscos potenciais. Isso pode levar até um minuto.",
        report_title: "Relatório de Análise",
        print_btn: "Imprimir Relatório",
        new_analysis_btn: "Nova Análise",
        disclaimer: "Aviso Legal: A LexGuard AI é uma ferramenta automatizada e não constitui aconselhamento jurídico profissional. Sempre consulte um advogado qualificado antes de assinar acordos vinculativos.",
        dd_label: "9. Incluir Background Check / Due Diligence?",
        dd_desc: "A LexGuard sugerirá verificações específicas sobre a contraparte usando fontes públicas.",
        supported_files: "Suportado: .pdf, .txt, .md",
        nav_context: "Contexto",
        nav_contract: "Contrato",
        nav_report: "Relatório",
    },
    messages: Messages {
        restart_confirm: "Isso apagará sua análise atual. Tem certeza?",
        analysis_failed: "Ocorreu um erro durante a análise. Verifique sua chave de API e tente novamente.",
        unsupported_file: "Por favor envie um arquivo .pdf, .txt ou .md.",
        unreadable_file: "Erro ao ler o arquivo. Ele pode estar corrompido ou não ser um PDF com texto.",
        no_extractable_text: "Não foi possível extrair texto deste arquivo. Pode estar vazio ou ser uma imagem digitalizada.",
        transition_refused: "Esta etapa não está disponível no momento.",
        empty_analysis: "Não foi possível gerar a análise.",
    },
    questions: &[
        Question {
            id: IntakeField::Purpose,
            label: "1. Objetivo da análise",
            placeholder: "ex: decidir se assino, renegociar, rescindir, processar...",
            help: "Qual é o objetivo principal desta análise?",
        },
        Question {
            id: IntakeField::Representation,
            label: "2. Quem você representa?",
            placeholder: "ex: comprador, vendedor, funcionário, inquilino, investidor...",
            help: "A favor de quem o contrato deve ser analisado?",
        },
        Question {
            id: IntakeField::Jurisdiction,
            label: "3. Lei aplicável e jurisdição",
            placeholder: "ex: Brasil (SP), Nova York (EUA), Londres...",
            help: "Qual país/estado rege este contrato?",
        },
        Question {
            id: IntakeField::ContractType,
            label: "4. Tipo de contrato",
            placeholder: "ex: SaaS, NDA, Trabalho, Locação, Prestação de Serviços...",
            help: "Qual é o tipo específico deste acordo?",
        },
        Question {
            id: IntakeField::Stage,
            label: "5. Estágio do relacionamento",
            placeholder: "ex: Minuta em negociação, Assinado e vigente...",
            help: "É uma nova minuta ou uma disputa existente?",
        },
        Question {
            id: IntakeField::Counterparty,
            label: "6. Perfil da contraparte",
            placeholder: "ex: Grande empresa, startup, pessoa física...",
            help: "Quem é a outra parte? Você sabe algo sobre eles?",
        },
        Question {
            id: IntakeField::RiskTolerance,
            label: "7. Tolerância ao risco e Prioridades",
            placeholder: "ex: Proteção máxima, Propriedade Intelectual é chave...",
            help: "Você busca uma visão equilibrada ou segurança máxima?",
        },
        Question {
            id: IntakeField::TimeHorizon,
            label: "8. Horizonte temporal e Relevância econômica",
            placeholder: "ex: 2 anos, Alto impacto financeiro...",
            help: "Qual a duração e quanto dinheiro está em jogo?",
        },
        Question {
            id: IntakeField::AdditionalInfo,
            label: "10. Outras informações importantes",
            placeholder: "ex: Preocupado com a cláusula de não concorrência...",
            help: "Cláusulas ou cenários específicos que te preocupam.",
        },
    ],
    system_instruction: SYSTEM_INSTRUCTION_PT,
    output_language: "Portuguese (Brazil)",
};
