//! Static reference data: ministries, church information pages, weekly services,
//! contact and donation details. None of it lives in the document store.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinistryDetails {
    pub leader: &'static str,
    pub schedule: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ministry {
    pub slug: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub banner_image: &'static str,
    pub description: &'static [&'static str],
    pub details: MinistryDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurchInfo {
    pub slug: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub banner_image: &'static str,
    pub content: &'static [Block],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurchService {
    pub title: &'static str,
    pub day: &'static str,
    pub time: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub address: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankAccount {
    pub bank: &'static str,
    pub agency: &'static str,
    pub account: &'static str,
    pub holder: &'static str,
    pub cnpj: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationInfo {
    pub pix_key: &'static str,
    pub account: BankAccount,
    pub verse: &'static str,
    pub verse_reference: &'static str,
}

pub const CHURCH_NAME: &str = "Igreja Evangélica Apostólica Missionária";

pub const MINISTRIES: &[Ministry] = &[
    Ministry {
        slug: "criancas",
        name: "Crianças",
        title: "Ministério Infantil",
        banner_image: "https://images.pexels.com/photos/3662843/pexels-photo-3662843.jpeg",
        description: &[
            "O Ministério Infantil \"Sementinhas da Fé\" é dedicado a ensinar as crianças sobre o amor de Jesus de uma forma divertida, criativa e segura.",
            "Nossa missão é construir uma base sólida da Palavra de Deus no coração dos pequenos, através de histórias bíblicas, louvores, brincadeiras e atividades que estimulam o crescimento espiritual e o relacionamento com Deus e com os amigos.",
            "Acreditamos que cada criança é um presente de Deus e nosso objetivo é cuidar delas com excelência, proporcionando um ambiente onde se sintam amadas, valorizadas e animadas para aprender mais sobre o Reino de Deus.",
        ],
        details: MinistryDetails {
            leader: "Tia Ana Paula",
            schedule: "Domingos, durante o Culto de Celebração (19:00)",
            contact: "infantil@ieam.com.br",
        },
    },
    Ministry {
        slug: "jovens",
        name: "Jovens",
        title: "Ministério de Jovens",
        banner_image: "https://images.pexels.com/photos/1036808/pexels-photo-1036808.jpeg",
        description: &[
            "O Ministério de Jovens \"Geração Eleita\" busca conectar a juventude com Cristo, fortalecendo a fé e criando laços de amizade verdadeiros.",
            "Promovemos encontros dinâmicos, com louvor, estudos bíblicos relevantes para os desafios atuais e momentos de comunhão. Nosso objetivo é equipar os jovens para serem luz no mundo e fazerem a diferença em sua geração.",
            "Se você é jovem e busca um lugar para crescer na fé e encontrar amigos, seu lugar é aqui!",
        ],
        details: MinistryDetails {
            leader: "Pr. Lucas Martins",
            schedule: "Sábados, às 19:30",
            contact: "jovens@ieam.com.br",
        },
    },
    Ministry {
        slug: "homens",
        name: "Homens",
        title: "Ministério de Homens",
        banner_image: "https://images.pexels.com/photos/8100784/pexels-photo-8100784.jpeg",
        description: &[
            "O Ministério de Homens \"Homens de Honra\" visa fortalecer e encorajar os homens a assumirem seu papel de liderança espiritual em suas famílias, na igreja e na sociedade, segundo os princípios bíblicos.",
            "Através de encontros, palestras e momentos de comunhão, buscamos o crescimento mútuo em sabedoria, integridade e serviço. Discutimos temas relevantes para o universo masculino à luz da Palavra de Deus.",
            "Junte-se a nós para ser um homem segundo o coração de Deus.",
        ],
        details: MinistryDetails {
            leader: "Presb. Carlos Andrade",
            schedule: "Toda 1ª Segunda-feira do mês, às 20:00",
            contact: "homens@ieam.com.br",
        },
    },
    Ministry {
        slug: "mulheres",
        name: "Mulheres",
        title: "Ministério de Mulheres",
        banner_image: "https://images.pexels.com/photos/3810792/pexels-photo-3810792.jpeg",
        description: &[
            "O Ministério de Mulheres \"Mulheres Virtuosas\" é um espaço de acolhimento, edificação e fortalecimento da identidade feminina em Cristo.",
            "Realizamos chás, conferências e estudos que abordam os desafios e as alegrias da vida da mulher cristã. Nosso propósito é encorajar umas às outras a florescer nos dons que Deus deu a cada uma, servindo com amor e graça.",
            "Venha fazer parte desta linda união de mulheres que buscam a presença de Deus juntas.",
        ],
        details: MinistryDetails {
            leader: "Pra. Lúcia Ferreira",
            schedule: "Toda 3ª Terça-feira do mês, às 19:30",
            contact: "mulheres@ieam.com.br",
        },
    },
    Ministry {
        slug: "ebd",
        name: "EBD",
        title: "Escola Bíblica Dominical",
        banner_image: "https://images.pexels.com/photos/415571/pexels-photo-415571.jpeg",
        description: &[
            "A Escola Bíblica Dominical (EBD) é o coração do ensino em nossa igreja, oferecendo um espaço para o estudo aprofundado e sistemático da Palavra de Deus para todas as idades.",
            "Com classes divididas por faixas etárias, desde crianças até adultos, a EBD proporciona um ambiente de aprendizado interativo, onde é possível tirar dúvidas, compartilhar experiências e crescer no conhecimento das Escrituras.",
            "Participe da EBD e fortaleça os alicerces da sua fé.",
        ],
        details: MinistryDetails {
            leader: "Sup. Diácono Roberto Neves",
            schedule: "Domingos, às 09:00",
            contact: "ebd@ieam.com.br",
        },
    },
    Ministry {
        slug: "louvor",
        name: "Louvor",
        title: "Ministério de Louvor",
        banner_image: "https://images.pexels.com/photos/167636/pexels-photo-167636.jpeg",
        description: &[
            "O Ministério de Louvor \"Adoração Profunda\" tem como principal objetivo conduzir a igreja a uma experiência genuína de adoração e intimidade com Deus através da música.",
            "Nossa equipe é formada por músicos e vocalistas dedicados que servem com excelência e unção, buscando criar uma atmosfera onde o Espírito Santo possa se mover livremente. Os ensaios são momentos de preparo técnico e, acima de tudo, espiritual.",
            "Cremos que o louvor é uma arma poderosa que quebra cadeias e abre os céus. Se você tem um chamado para a música e deseja servir a Deus com seu talento, venha fazer parte da nossa equipe.",
        ],
        details: MinistryDetails {
            leader: "Líder João Batista",
            schedule: "Ensaios aos Sábados, às 17:00",
            contact: "louvor@ieam.com.br",
        },
    },
];

pub const CHURCH_INFO: &[ChurchInfo] = &[
    ChurchInfo {
        slug: "historia",
        name: "História",
        title: "Nossa História",
        banner_image: "https://images.pexels.com/photos/277454/pexels-photo-277454.jpeg",
        content: &[
            Block::Paragraph("Fundada em 1998, a Igreja Evangélica Apostólica Missionária nasceu de um pequeno grupo de oração com um grande desejo de ver a comunidade transformada pelo amor de Cristo. O que começou em uma sala de estar com apenas dez membros, rapidamente floresceu em uma comunidade vibrante e crescente."),
            Block::Paragraph("Ao longo dos anos, crescemos em número e em fé, sempre mantendo nosso foco na pregação da Palavra, na comunhão dos santos e no serviço ao próximo. Em 2005, inauguramos nosso primeiro templo, um marco de fé e da provisão de Deus. Hoje, somos gratos por tudo que Deus tem feito e animados para o futuro que Ele nos reserva, continuando a ser um farol de esperança em nossa cidade."),
        ],
    },
    ChurchInfo {
        slug: "missao",
        name: "Missão",
        title: "Nossa Missão, Visão e Valores",
        banner_image: "https://images.pexels.com/photos/3356416/pexels-photo-3356416.jpeg",
        content: &[
            Block::Heading("Missão"),
            Block::Paragraph("Nossa missão é glorificar a Deus, fazendo discípulos de todas as nações, batizando-os em nome do Pai, do Filho e do Espírito Santo, e ensinando-os a obedecer a tudo o que Cristo ordenou (Mateus 28:19-20)."),
            Block::Heading("Visão"),
            Block::Paragraph("Ser uma igreja relevante e acolhedora, que impacta a sociedade com o Evangelho transformador de Jesus, através do amor, serviço e comunhão."),
            Block::Heading("Valores"),
            Block::Paragraph("Adoração a Deus, Compromisso com a Bíblia, Comunhão Fraterna, Serviço ao Próximo, Evangelismo e Missões."),
        ],
    },
    ChurchInfo {
        slug: "governanca",
        name: "Governança",
        title: "Nossa Governança",
        banner_image: "https://images.pexels.com/photos/7745564/pexels-photo-7745564.jpeg",
        content: &[
            Block::Paragraph("A IEAM é governada por um conselho de presbíteros, liderado pelo pastor presidente, que são responsáveis pela direção espiritual, doutrinária e administrativa da igreja. Cremos no modelo bíblico de liderança servidora, onde aqueles que lideram o fazem com humildade e para o bem do rebanho."),
            Block::Paragraph("O corpo diaconal atua no serviço prático e no cuidado com os membros, garantindo que as necessidades da comunidade sejam atendidas. Todas as decisões importantes são tomadas em oração e submissão à direção do Espírito Santo e da Palavra de Deus."),
        ],
    },
    ChurchInfo {
        slug: "principios",
        name: "Princípios",
        title: "Nossos Princípios de Fé",
        banner_image: "https://images.pexels.com/photos/458844/pexels-photo-458844.jpeg",
        content: &[
            Block::Paragraph("Cremos na Bíblia como a Palavra de Deus inspirada, inerrante e autoritativa."),
            Block::Paragraph("Cremos em um só Deus, eternamente existente em três pessoas: Pai, Filho e Espírito Santo."),
            Block::Paragraph("Cremos na divindade de nosso Senhor Jesus Cristo, em Seu nascimento virginal, em Sua vida sem pecado, em Seus milagres, em Sua morte vicária e expiatória, em Sua ressurreição corporal, em Sua ascensão à direita do Pai e em Sua volta pessoal em poder e glória."),
            Block::Paragraph("Cremos que a salvação é pela graça, através da fé em Jesus Cristo, e não por obras."),
            Block::Paragraph("Cremos no ministério atual do Espírito Santo, que capacita o crente a viver uma vida de santidade e serviço."),
        ],
    },
    ChurchInfo {
        slug: "financas",
        name: "Finanças",
        title: "Transparência Financeira",
        banner_image: "https://images.pexels.com/photos/6863248/pexels-photo-6863248.jpeg",
        content: &[
            Block::Paragraph("Cremos que tudo o que temos pertence a Deus, e somos apenas mordomos dos recursos que Ele nos confia. A IEAM é mantida através dos dízimos e ofertas voluntárias de seus membros e congregados, que contribuem com alegria e generosidade."),
            Block::Paragraph("Temos um compromisso com a transparência e a boa gestão financeira. Relatórios financeiros são apresentados periodicamente à igreja, e todos os recursos são investidos na manutenção da obra, no avanço do evangelho e no cuidado com os necessitados, para a glória de Deus."),
        ],
    },
    ChurchInfo {
        slug: "estatuto",
        name: "Estatuto",
        title: "Estatuto da Igreja",
        banner_image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg",
        content: &[
            Block::Heading("Artigo 1: Denominação e Sede"),
            Block::Paragraph("A Igreja Evangélica Apostólica Missionária, doravante denominada IEAM, é uma organização religiosa sem fins lucrativos, com sede e foro na cidade de Cariacica, estado do Espírito Santo."),
            Block::Heading("Artigo 2: Fins"),
            Block::Paragraph("A IEAM tem por finalidade prestar culto a Deus, pregar o evangelho de Nosso Senhor Jesus Cristo, promover o ensino das Escrituras Sagradas, e desenvolver atividades de assistência social e beneficência."),
        ],
    },
    ChurchInfo {
        slug: "congregacoes",
        name: "Congregações",
        title: "Nossas Congregações",
        banner_image: "https://images.pexels.com/photos/1750275/pexels-photo-1750275.jpeg",
        content: &[
            Block::Paragraph("Além da nossa sede, a IEAM se estende por outras localidades, levando a Palavra de Deus a mais corações. Conheça nossas congregações."),
        ],
    },
];

pub const WEEKLY_SERVICES: &[ChurchService] = &[
    ChurchService {
        title: "Círculo de Oração",
        day: "Terças-feiras",
        time: "19:30",
        description: "Um tempo dedicado à oração e intercessão. Venha buscar a face do Senhor e clamar por nossa igreja, cidade e nação.",
    },
    ChurchService {
        title: "Culto de Ensino",
        day: "Quintas-feiras",
        time: "19:30",
        description: "Aprofunde-se na Palavra de Deus com estudos bíblicos temáticos e expositivos. Ideal para quem deseja crescer em conhecimento.",
    },
    ChurchService {
        title: "Escola Bíblica Dominical",
        day: "Domingos",
        time: "09:00",
        description: "Classes para todas as idades, com ensino bíblico de qualidade para edificar sua fé desde o início do dia.",
    },
    ChurchService {
        title: "Culto de Celebração",
        day: "Domingos",
        time: "19:00",
        description: "O ponto alto da nossa semana! Uma grande festa de adoração a Deus com louvor, comunhão e uma mensagem poderosa.",
    },
];

pub const LEADERS: &[Leader] = &[
    Leader {
        name: "Pr. João Silva",
        role: "Pastor Presidente",
    },
    Leader {
        name: "Pra. Maria Oliveira",
        role: "Pastora de Jovens",
    },
    Leader {
        name: "Pr. Carlos Santos",
        role: "Pastor de Missões",
    },
];

pub const CONTACT: ContactInfo = ContactInfo {
    address: &[
        "Rua João Rodrigues Filho, S/Nº",
        "Morrinhos, Cariacica Sede - ES",
        "CEP 29156-000",
    ],
    email: "contato@ieam.com.br",
    phone: "(11) 98765-****",
};

pub const DONATION: DonationInfo = DonationInfo {
    pix_key: "a1b2c3d4-e5f6-a7b8-c9d0-e1f2a3b4c5d6",
    account: BankAccount {
        bank: "Banco do Brasil (001)",
        agency: "1234-5",
        account: "12345-6",
        holder: CHURCH_NAME,
        cnpj: "12.345.678/0001-90",
    },
    verse: "Cada um dê conforme determinou em seu coração, não com pesar ou por obrigação, pois Deus ama quem dá com alegria.",
    verse_reference: "2 Coríntios 9:7",
};

pub fn ministry(slug: &str) -> Option<&'static Ministry> {
    MINISTRIES.iter().find(|ministry| ministry.slug == slug)
}

pub fn church_info(slug: &str) -> Option<&'static ChurchInfo> {
    CHURCH_INFO.iter().find(|info| info.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::slugify;

    #[test]
    fn lookups_by_slug() {
        assert_eq!(ministry("jovens").map(|m| m.name), Some("Jovens"));
        assert_eq!(church_info("missao").map(|i| i.content.len()), Some(6));
        assert!(ministry("nao-existe").is_none());
    }

    #[test]
    fn static_collections_have_expected_sizes() {
        assert_eq!(MINISTRIES.len(), 6);
        assert_eq!(CHURCH_INFO.len(), 7);
        assert_eq!(WEEKLY_SERVICES.len(), 4);
    }

    #[test]
    fn slugs_are_already_normalized() {
        for slug in MINISTRIES
            .iter()
            .map(|m| m.slug)
            .chain(CHURCH_INFO.iter().map(|i| i.slug))
        {
            assert_eq!(slugify(slug), slug);
        }
    }
}
