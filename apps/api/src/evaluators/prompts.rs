// All LLM prompt constants for the evaluator scoring functions.
// Each evaluator fills its template placeholders via `str::replace`.

/// System prompt for completeness judgment: enforces JSON-only output.
pub const COMPLETENESS_SYSTEM: &str =
    "You are an interview answer evaluator. You assess how completely a \
    candidate's response addresses a question given expected answer bullet \
    points. Be professional and neutral; do not make assumptions about \
    intent or ability. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Completeness prompt template.
/// Replace: {topic}, {question}, {answer}, {expected_bullets}
pub const COMPLETENESS_PROMPT_TEMPLATE: &str = r#"Evaluate how completely the candidate's answer addresses the question.

TOPIC: {topic}
QUESTION: {question}

CANDIDATE ANSWER:
{answer}

EXPECTED ANSWER BULLET POINTS:
{expected_bullets}

Classification rules:
- "complete": the answer covers most or all expected points in a relevant, coherent manner. Minor omissions are acceptable if the core elements are addressed.
- "partial": the answer addresses some but not all expected points; key elements are missing or insufficiently covered.
- "missing": the answer does not meaningfully address the expected points, stays superficial, or focuses on unrelated aspects.

Return a JSON object with this EXACT schema:
{
  "completeness": "complete|partial|missing",
  "rationale": "one sentence summarising which expected points were addressed and which were lacking",
  "follow_up": "a single question to elicit the missing information"
}

Include "follow_up" ONLY when completeness is "partial" or "missing". Omit the key entirely for a complete answer."#;

/// System prompt for answer rating: enforces JSON-only output.
pub const RATING_SYSTEM: &str =
    "You are an experienced hiring manager and interview evaluator. You rate \
    candidate answers fairly and consistently, based only on evidence in the \
    answer itself, never on personal bias or assumptions about background \
    or other sensitive characteristics. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Rating prompt template.
/// Replace: {company}, {role}, {job_description}, {resume}, {topic},
///          {question}, {answer}, {expected_bullets}
pub const RATING_PROMPT_TEMPLATE: &str = r#"Rate the candidate's answer across eight criteria, each scored 1-5 with a brief evidence-based justification.

HIRING CONTEXT:
- Company: {company}
- Role: {role}
- Job description: {job_description}
- Candidate resume: {resume}

TOPIC: {topic}
QUESTION: {question}

CANDIDATE ANSWER (verbatim):
{answer}

EXPECTED ANSWER BULLET POINTS:
{expected_bullets}

Criteria:
1. content_relevance: did the candidate directly answer the question and stay on topic?
2. clarity_structure: was the answer logical, structured, and easy to follow?
3. depth_insight: deep knowledge, critical thinking, reflection vs. superficial or generic content.
4. impact_results: evidence of outcomes, metrics, or business value.
5. behavioral_signals: ownership, collaboration, adaptability, leadership aligned to the role.
6. communication_style: clear, confident, professional; note "we" (team effort) vs "I" (individual contribution).
7. personality_coherence: examples consistent with the resume and appropriate to the role and context.
8. cultural_fit: professional, respectful, appropriate language; no disclosure of confidential information from current or past employers.

Scoring scale: 5 excellent, 4 good, 3 adequate, 2 weak, 1 poor.
If there is insufficient information for a criterion, assign 3 and say so in the justification.

Return a JSON object with this EXACT schema:
{
  "question": "<the interview question>",
  "answer": "<the candidate's answer>",
  "scores": {
    "content_relevance": {"score": 0, "justification": ""},
    "clarity_structure": {"score": 0, "justification": ""},
    "depth_insight": {"score": 0, "justification": ""},
    "impact_results": {"score": 0, "justification": ""},
    "behavioral_signals": {"score": 0, "justification": ""},
    "communication_style": {"score": 0, "justification": ""},
    "personality_coherence": {"score": 0, "justification": ""},
    "cultural_fit": {"score": 0, "justification": ""}
  }
}

Each justification is one or two sentences citing specific elements of the answer. No additional keys."#;

/// System prompt for resume fit evaluation: enforces JSON-only output.
pub const RESUME_FIT_SYSTEM: &str =
    "You are a rigorous, fair, and bias-aware resume evaluator. Ground every \
    claim in the provided texts only, prefer factual achievements over \
    buzzwords, and ignore personal or biased information such as name, age, \
    gender, nationality, or school prestige. Mark missing or ambiguous \
    information as \"unknown\" and lower confidence accordingly. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume fit prompt template.
/// Replace: {job_description}, {resume}, {company}
pub const RESUME_FIT_PROMPT_TEMPLATE: &str = r#"Assess how well the candidate fits the role.

JOB DESCRIPTION:
{job_description}

CANDIDATE RESUME:
{resume}

COMPANY INFORMATION:
{company}

Score these dimensions 0-5, weighted as shown:
- core_requirements (0.30), skills (0.20), domain_fit (0.15), impact_outcomes (0.15), leadership (0.10), culture_alignment (0.05), logistics (0.05)

Compute the weighted score on a 0-100 scale and map it to a verdict:
Strong Fit (>=80), Potential Fit (65-79), Weak/Unlikely Fit (50-64), No Fit (<50).

Return a JSON object with this EXACT schema:
{
  "role_title": "",
  "candidate_name": "",
  "overall_score_0to100": 0,
  "verdict": "Strong Fit | Potential Fit | Weak/Unlikely Fit | No Fit",
  "confidence_0to1": 0.0,
  "dimension_scores": {
    "core_requirements": {"score_0to5": 0, "weight": 0.30, "evidence": []},
    "skills": {"score_0to5": 0, "weight": 0.20, "evidence": []},
    "domain_fit": {"score_0to5": 0, "weight": 0.15, "evidence": []},
    "impact_outcomes": {"score_0to5": 0, "weight": 0.15, "evidence": []},
    "leadership": {"score_0to5": 0, "weight": 0.10, "evidence": []},
    "culture_alignment": {"score_0to5": 0, "weight": 0.05, "evidence": []},
    "logistics": {"score_0to5": 0, "weight": 0.05, "evidence": []}
  },
  "must_haves_check": {"items": [], "missing_critical": []},
  "red_flags": [],
  "notable_strengths": [],
  "risks_and_gaps": [],
  "summary_for_recruiter": "",
  "follow_up_questions": []
}

Evidence snippets must be short and verbatim from the texts. Keep the recruiter summary to 2-4 sentences. Use "unknown" instead of guessing."#;

/// System prompt for final verdict synthesis: enforces JSON-only output.
pub const VERDICT_SYSTEM: &str =
    "You are a senior hiring committee member synthesising a final candidate \
    verdict from a resume evaluation and a completed interview. Use evidence \
    only, call out discrepancies between resume claims and interview \
    signals, and ignore biased personal attributes. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Verdict prompt template.
/// Replace: {company}, {role}, {job_description}, {interview_plan},
///          {answers}, {resume_evaluation}
pub const VERDICT_PROMPT_TEMPLATE: &str = r#"Synthesise a final hiring verdict for this candidate.

COMPANY: {company}
ROLE: {role}
JOB DESCRIPTION:
{job_description}

INTERVIEW PLAN (topics and questions):
{interview_plan}

ANSWER RECORDS (final answers with completeness judgments and ratings):
{answers}

RESUME EVALUATION (baseline anchor; may be null):
{resume_evaluation}

Method:
1. Start from the resume evaluation score as the 0-100 anchor (50 when null).
2. Adjust by up to ~15 points total for interview completeness coverage, average answer quality across the eight rating criteria, sustained communication/culture signals, and any new risks. Clamp to [0, 100].
3. Map to a verdict: Strong Hire (>=85), Hire (75-84), Leaning Hire (68-74), Neutral (60-67), Leaning No-Hire (50-59), No-Hire (<50).
4. Confidence 0.4-0.9 scaled by evidence richness; many unknowns or partial answers lower it.

Return a JSON object with this EXACT schema:
{
  "company": "",
  "role_title": "",
  "overall_score_0to100": 0,
  "verdict": "Strong Hire | Hire | Leaning Hire | Neutral | Leaning No-Hire | No-Hire",
  "confidence_0to1": 0.0,
  "strengths": ["3-6 concise bullets grounded in evidence"],
  "concerns": ["3-6 concise bullets grounded in evidence"],
  "follow_up_recommendations": ["targeted questions or tasks to resolve unknowns"],
  "next_steps": ["e.g. references, technical deep-dive, panel focus areas"],
  "summary": "2-4 sentence synthesis for the hiring committee"
}"#;
