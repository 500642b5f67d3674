use super::Tone;

#[derive(Debug, Clone, Copy)]
pub struct ScriptInput<'a> {
    pub product_name: &'a str,
    pub main_benefit: &'a str,
    pub tone: Tone,
}

fn vibe(tone: Tone) -> &'static str {
    match tone {
        Tone::Energetic => "⚡ Vibe: Cortada, rápida, alta energia, emojis, foco em retenção.",
        Tone::Professional => "🎓 Vibe: Autoridade, séria, limpa, foco em fatos e resultados.",
        Tone::Humorous => "😂 Vibe: Irônica, leve, usa gírias de internet, meme-style.",
        Tone::Emotional => {
            "💖 Vibe: Contação de história (storytelling), música triste/inspiradora de fundo."
        }
        Tone::Urgent => "🚨 Vibe: Escassez, promoção relâmpago, 'só hoje', gatilho de perda.",
        Tone::Asmr => "🌿 Vibe: Sussurrada, sons satisfatórios, calma, 'satisfying'.",
    }
}

/// Asks for three TikTok scripts separated by `---`.
pub fn script_request(input: &ScriptInput<'_>) -> String {
    format!(
        r#"ACT AS A WORLD-CLASS TIKTOK SCRIPTWRITER.

**OBJECTIVE:** Create 3 VIRAL scripts for:
- Product: "{product}"
- Benefit: "{benefit}"
- Tone: {tone}

**RULES:**
1. Hooks MUST be under 3 seconds.
2. Use "YOU" language (fale diretamente com o usuário).
3. Native Brazilian Portuguese (Gírias naturais, nada de 'português traduzido').
4. NO corporate speak. Use generic internet slang.

**FORMAT (STRICTLY FOLLOW THIS):**

**OPTION 1: THE PATTERN INTERRUPT (Visual Hook)**
[Scene]: (Describe a visually weird or satisfying action to stop scrolling)
[Text Overlay]: (Short impactful text)
[Audio]: "(Script in PT-BR)"

---

**OPTION 2: THE SECRET/HACK (Curiosity Hook)**
[Scene]: (Whispering to camera or showing a hidden detail)
[Text Overlay]: "Não conte pra ninguém..."
[Audio]: "(Script in PT-BR)"

---

**OPTION 3: THE DRAMATIC PROBLEM (Relatable Hook)**
[Scene]: (Person looking frustrated/sad with the 'old way')
[Text Overlay]: "Cansada de...?"
[Audio]: "(Script in PT-BR)""#,
        product = input.product_name,
        benefit = input.main_benefit,
        tone = vibe(input.tone),
    )
}
